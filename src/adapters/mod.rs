pub mod api_errors;
pub mod razorpay;
pub mod razorpay_client;

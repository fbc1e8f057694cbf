pub mod session_error;

pub mod ports;
pub mod verification;
pub mod dispatch;
pub mod submission_use_case;

/// Fixed values shared by the submission pipeline and its adapters

// Phone numbers are checked against this country unless configured otherwise
pub const DEFAULT_COUNTRY_CODE: &str = "IN";

// Sentinel sent to the admin when the submitter left the phone blank
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

pub const DEFAULT_SUCCESS_RESET_MS: u64 = 5000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const MAILBOXLAYER_BASE_URL: &str = "https://apilayer.net";
pub const NUMVERIFY_BASE_URL: &str = "https://apilayer.net";
pub const EMAILJS_BASE_URL: &str = "https://api.emailjs.com";

pub const USER_AGENT: &str = concat!("estate_contact/", env!("CARGO_PKG_VERSION"));

// Credentials are only ever read from the environment
pub const ENV_MAILBOXLAYER_KEY: &str = "MAILBOXLAYER_ACCESS_KEY";
pub const ENV_NUMVERIFY_KEY: &str = "NUMVERIFY_ACCESS_KEY";
pub const ENV_EMAILJS_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const ENV_EMAILJS_PRIVATE_KEY: &str = "EMAILJS_PRIVATE_KEY";

// User-facing messages
pub const MSG_MISSING_FIELDS: &str = "Please fill all required fields (Name, Email, and Message).";
pub const MSG_BAD_EMAIL: &str = "Invalid email format. Please check your email address.";
pub const MSG_BAD_PHONE: &str = "Invalid phone number. Please enter a 10-digit number.";
pub const MSG_EMAIL_REJECTED: &str =
    "The provided email address does not exist or cannot receive messages.";
pub const MSG_EMAIL_UNAVAILABLE: &str = "Could not verify email address. Please try again later.";
pub const MSG_PHONE_REJECTED: &str = "The provided phone number is invalid or does not exist.";
pub const MSG_PHONE_UNAVAILABLE: &str = "Could not verify phone number. Please try again later.";
pub const MSG_DELIVERY_FAILED: &str = "Failed to send your message. Please try again later.";
pub const MSG_SUCCESS: &str = "Message sent successfully!";

// Catalog carousel: 250px slide + 20px margin
pub const CAROUSEL_SLIDE_WIDTH_PX: i64 = 270;

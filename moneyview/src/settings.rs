
/// Base URL of the transactions API
pub const API_BASE_URL: &'static str = &"http://localhost:3333";

macro_rules! api_uri {
    ($e:expr) => (format!("{}/{}", $crate::settings::API_BASE_URL, $e));
    ($fmt:literal $(, $e:expr)*) => (format!(concat!("{}/", $fmt), $crate::settings::API_BASE_URL $(, $e)*));
}

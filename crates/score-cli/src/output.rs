use serde::Serialize;

const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON envelope printed for every subcommand.
#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> CliResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            api_version: API_VERSION,
            data: Some(data),
            error: None,
        }
    }
}

impl CliResponse<()> {
    fn failed(message: &str) -> Self {
        Self {
            success: false,
            api_version: API_VERSION,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

/// Payload for commands that may leave the list untouched.
#[derive(Serialize)]
pub struct ChangeResponse {
    pub changed: bool,
}

pub fn output_success<T: Serialize>(data: T) {
    match serde_json::to_string(&CliResponse::ok(data)) {
        Ok(json) => println!("{}", json),
        Err(e) => output_error(&format!("failed to encode response: {}", e)),
    }
}

pub fn output_list<T: Serialize>(items: Vec<T>) {
    let count = items.len();
    output_success(ListResponse { items, count });
}

pub fn output_changed(changed: bool) {
    output_success(ChangeResponse { changed });
}

/// Prints an error response to stderr and exits with code 1.
pub fn output_error(message: &str) -> ! {
    let json = serde_json::to_string(&CliResponse::failed(message));
    eprintln!("{}", json.as_deref().unwrap_or(message));
    std::process::exit(1);
}

pub mod paths;
pub mod pkg;
pub mod version;

use natfed_core::Error;

/// Print a fatal error as a single JSON object and exit.
pub(crate) fn exit_with_json_error(error: &Error) -> ! {
    println!(
        "{}",
        serde_json::json!({
            "ok": false,
            "error": {
                "code": error.code(),
                "message": error.to_string()
            }
        })
    );
    std::process::exit(1);
}

use chrono::{SecondsFormat, Utc};
use env_logger::{Builder, Env};
use serde_json::{json, Value};
use std::io::Write;

/// Writes a single JSON object per log line so that log aggregators can
/// ingest entries without a parsing step.
///
/// `jlog!(Info, "Event created")` produces
/// `{"level":"INFO","time":"...","target":"my_module","message":"Event created"}`
/// and metadata can be attached as a JSON literal:
/// ```text
/// jlog!(Error, "Rejected draft", { "event_id": id });
/// ```
#[macro_export]
macro_rules! jlog {
    ($level:path, $msg:expr) => {{
        $crate::log_entry($level, module_path!(), $msg, None)
    }};
    ($level:path, $msg:expr, $meta:tt) => {{
        $crate::log_entry($level, module_path!(), $msg, Some($crate::serde_json::json!($meta)))
    }};
    ($level:path, $target:expr, $msg:expr, $meta:tt) => {{
        $crate::log_entry($level, $target, $msg, Some($crate::serde_json::json!($meta)))
    }};
}

#[doc(hidden)]
pub use serde_json;

pub fn log_entry(level: log::Level, target: &str, message: &str, meta: Option<Value>) {
    let mut entry = json!({
        "level": level.to_string(),
        "time": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        "target": target,
        "message": message.trim(),
    });
    if let (Some(object), Some(Value::Object(meta))) = (entry.as_object_mut(), meta) {
        for (key, value) in meta {
            object.entry(key).or_insert(value);
        }
    }
    log::log!(target: target, level, "{}", entry);
}

/// Installs an env_logger backend that emits jlog records verbatim. Records
/// from other sources pass through untouched, so plain `log!` calls from
/// dependencies remain readable.
pub fn setup_logger() {
    Builder::from_env(Env::default())
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

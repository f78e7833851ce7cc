//! Dispatch of fixture cases to `tagtidy-core`.
//!
//! Each operation's output is rendered as a string so that fixtures can
//! compare it verbatim: booleans as `true`/`false`, byte buffers in `{:?}`
//! list form, name lists as a JSON array. A precondition panic inside the
//! core is caught and rendered as `panic: <message>`.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use serde_json::Value;
use tagtidy_core::text;
use tagtidy_core::{Capitalization, Normalizer, NormalizerConfig, TrackInfo};
use thiserror::Error;

/// Errors that keep a case from running at all.
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("{function}: missing or mistyped input '{field}'")]
    BadInput {
        function: String,
        field: &'static str,
    },
}

/// Every function name [`execute_fixture_case`] understands.
pub const SUPPORTED_FUNCTIONS: &[&str] = &[
    "contains_character",
    "contains_char",
    "char_copy",
    "copy_chars",
    "pack_field",
    "unpack_field",
    "replace_all",
    "collapse_to_last",
    "replace_all_but_last",
    "remove_duplicate_spaces",
    "fix_capitals",
    "clean_string",
    "clean_folder",
    "track_info",
];

/// Runs one fixture case and returns its rendered output.
pub fn execute_fixture_case(
    function: &str,
    inputs: &Value,
    policy: Capitalization,
) -> Result<String, ExecuteError> {
    let args = Args { function, inputs };
    let output = match function {
        "contains_character" => {
            let s = args.str("s")?.as_bytes().to_vec();
            let c = args.byte("c")?;
            let n = args.usize("n")?;
            guarded(move || text::contains_character(&s, c, n).to_string())
        }
        "contains_char" => {
            let s = args.str("s")?.to_string();
            let c = args.char("c")?;
            let count = args.usize("count")?;
            guarded(move || text::contains_char(&s, c, count).to_string())
        }
        "char_copy" => {
            let mut dest = args.str("dest")?.as_bytes().to_vec();
            let src = args.str("src")?.as_bytes().to_vec();
            let n = args.usize("n")?;
            guarded(move || {
                text::char_copy(&mut dest, &src, n);
                String::from_utf8_lossy(&dest).into_owned()
            })
        }
        "copy_chars" => {
            let mut dest = args.str("dest")?.to_string();
            let src = args.str("src")?.to_string();
            let count = args.usize("count")?;
            guarded(move || {
                text::copy_chars(&mut dest, &src, count);
                dest
            })
        }
        "pack_field" => {
            let s = args.str("s")?.to_string();
            let width = args.usize("width")?;
            guarded(move || format!("{:?}", text::pack_field(&s, width)))
        }
        "unpack_field" => {
            let bytes = args.bytes("bytes")?;
            text::unpack_field(&bytes)
        }
        "replace_all" => {
            let replacement = args.replacement()?;
            text::replace_all_with(args.str("s")?, args.char("target")?, replacement)
        }
        "collapse_to_last" => {
            let replacement = args.replacement()?;
            text::collapse_to_last_with(args.str("s")?, args.char("target")?, replacement)
        }
        "replace_all_but_last" => {
            let replacement = args.replacement()?;
            text::replace_all_but_last(args.str("s")?, args.char("target")?, replacement)
        }
        "remove_duplicate_spaces" => text::remove_duplicate_spaces(args.str("s")?),
        "fix_capitals" => text::fix_capitals_with(args.str("s")?, policy),
        "clean_string" => args.normalizer(policy)?.clean(args.str("s")?),
        "clean_folder" => {
            let names = args.strings("names")?;
            let cleaned = args.normalizer(policy)?.clean_folder(&names);
            serde_json::to_string(&cleaned).unwrap_or_default()
        }
        "track_info" => {
            let normalizer = args.normalizer(policy)?;
            let path = Path::new(args.str("path")?);
            let parsed = match args.optional_str("cleaned_filename") {
                Some(cleaned) => TrackInfo::from_path_with(&normalizer, path, cleaned),
                None => normalizer.track_info(path),
            };
            match parsed {
                Ok(info) => info.to_string(),
                Err(err) => format!("error: {err}"),
            }
        }
        other => return Err(ExecuteError::UnknownFunction(other.to_string())),
    };
    Ok(output)
}

/// Runs `f`, turning a panic into `panic: <message>`.
fn guarded<F>(f: F) -> String
where
    F: FnOnce() -> String,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(output) => output,
        Err(payload) => {
            let message = payload
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| payload.downcast_ref::<&str>().copied())
                .unwrap_or("<non-string panic>");
            format!("panic: {message}")
        }
    }
}

struct Args<'a> {
    function: &'a str,
    inputs: &'a Value,
}

impl<'a> Args<'a> {
    fn bad(&self, field: &'static str) -> ExecuteError {
        ExecuteError::BadInput {
            function: self.function.to_string(),
            field,
        }
    }

    fn optional_str(&self, field: &'static str) -> Option<&'a str> {
        self.inputs.get(field).and_then(Value::as_str)
    }

    fn str(&self, field: &'static str) -> Result<&'a str, ExecuteError> {
        self.optional_str(field).ok_or_else(|| self.bad(field))
    }

    fn char(&self, field: &'static str) -> Result<char, ExecuteError> {
        let s = self.str(field)?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(self.bad(field)),
        }
    }

    fn byte(&self, field: &'static str) -> Result<u8, ExecuteError> {
        let c = self.char(field)?;
        u8::try_from(c).map_err(|_| self.bad(field))
    }

    fn usize(&self, field: &'static str) -> Result<usize, ExecuteError> {
        self.inputs
            .get(field)
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| self.bad(field))
    }

    fn bytes(&self, field: &'static str) -> Result<Vec<u8>, ExecuteError> {
        let values = self
            .inputs
            .get(field)
            .and_then(Value::as_array)
            .ok_or_else(|| self.bad(field))?;
        values
            .iter()
            .map(|v| {
                v.as_u64()
                    .and_then(|n| u8::try_from(n).ok())
                    .ok_or_else(|| self.bad(field))
            })
            .collect()
    }

    fn strings(&self, field: &'static str) -> Result<Vec<&'a str>, ExecuteError> {
        let values = self
            .inputs
            .get(field)
            .and_then(Value::as_array)
            .ok_or_else(|| self.bad(field))?;
        values
            .iter()
            .map(|v| v.as_str().ok_or_else(|| self.bad(field)))
            .collect()
    }

    /// `replacement` input, defaulting to [`text::REPLACEMENT_CHAR`].
    fn replacement(&self) -> Result<char, ExecuteError> {
        if self.inputs.get("replacement").is_some() {
            self.char("replacement")
        } else {
            Ok(text::REPLACEMENT_CHAR)
        }
    }

    /// Normalizer for the active policy, with an optional `config` input
    /// overriding the rest of the configuration.
    fn normalizer(&self, policy: Capitalization) -> Result<Normalizer, ExecuteError> {
        let mut config = match self.inputs.get("config") {
            Some(raw) => serde_json::from_value::<NormalizerConfig>(raw.clone())
                .map_err(|_| self.bad("config"))?,
            None => NormalizerConfig::default(),
        };
        config.capitalization = policy;
        Ok(Normalizer::new(config))
    }
}

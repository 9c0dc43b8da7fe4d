use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Expansion happens on the raw config text before deserialization, so
/// config structs use plain String/SecretString. Lines starting with `#`
/// (TOML comments) are passed through unchanged, which lets template
/// configs carry commented-out placeholders for variables that are not
/// set yet.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"\{\{\s*env\.([A-Za-z0-9_]+)\s*\}\}").expect("must be valid regex")
        })
    }

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;

        for captures in re().captures_iter(line) {
            let overall = captures.get(0).expect("capture 0 always present");
            let var_name = captures.get(1).expect("group 1 always present").as_str();

            output.push_str(&line[last_end..overall.start()]);

            match std::env::var(var_name) {
                Ok(value) => output.push_str(&value),
                Err(_) => return Err(format!("environment variable not found: `{var_name}`")),
            }

            last_end = overall.end();
        }

        output.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

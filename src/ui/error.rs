use crate::ui::primitives::icon::Icon;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Error: {:#}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    )
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        println!("{}", output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}

pub fn print_warning(message: &str, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "warning",
            "message": message,
        });
        println!("{}", output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprintln!(
        "{} {}",
        Icon::Warning.colored(caps.supports_color, caps.supports_unicode),
        message
    );
}

//! Builder for the page-side console patch.

/// Console methods wrapped by the patch.
pub const WRAPPED_METHODS: [&str; 4] = ["log", "warn", "error", "info"];

/// Confirmation line logged by the patch once wrapping is in place.
pub const INSTALL_NOTICE: &str = "[bridge] console forwarding active";

/// Builds the script that wraps the page's console methods.
///
/// Each wrapper calls the original method first, then forwards the joined
/// string form of the arguments to `window.<member>.log`, swallowing any
/// forwarding error so a bridge failure never breaks page logging.
/// Non-`log` levels carry an upper-case tag on the forwarded line. Running
/// the script again wraps the current functions once more; layers are
/// never detected or removed.
pub fn console_patch(member: &str) -> String {
    let member_js = js_string(member);
    let notice_js = js_string(INSTALL_NOTICE);
    let methods_js = WRAPPED_METHODS
        .iter()
        .map(|method| js_string(method))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"(function() {{
  [{methods_js}].forEach(function(method) {{
    const prior = console[method];
    console[method] = function() {{
      const args = Array.prototype.slice.call(arguments);
      prior.apply(console, args);
      try {{
        let line = args.map(String).join(' ');
        if (method !== 'log') {{
          line = '[' + method.toUpperCase() + '] ' + line;
        }}
        window[{member_js}].log(line);
      }} catch (e) {{}}
    }};
  }});
  console.log({notice_js});
}})();"#
    )
}

/// Embeds a Rust string as a JS string literal.
pub(crate) fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

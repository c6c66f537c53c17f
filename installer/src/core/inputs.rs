//! Rendering of the user-facing input file (`give_inputs.txt`).

/// Render one `key: ` line per input key, preserving order.
pub fn render_input_template<S: AsRef<str>>(keys: &[S]) -> String {
    let mut out = String::new();
    for key in keys {
        out.push_str(key.as_ref());
        out.push_str(": \n");
    }
    out
}

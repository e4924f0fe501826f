use std::io::Write;

/// Two-line usage text shown when the argument count is wrong.
pub fn write_usage(out: &mut impl Write, program: &str) -> std::io::Result<()> {
    writeln!(out, "Usage:")?;
    writeln!(out, "  {} <json-file-path | json-content>", program)
}

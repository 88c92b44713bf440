use std::io::Write;

/// Writes one part's answer as a bare number on its own line and flushes it straight away, so
/// it's out before the next part starts.
pub fn write_answer(out: &mut impl Write, answer: usize) -> std::io::Result<()> {
    writeln!(out, "{answer}")?;
    out.flush()
}

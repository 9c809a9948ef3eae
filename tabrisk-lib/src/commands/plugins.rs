use super::Host;
use crate::Result;
use crate::engine::Registry;
use crate::plugins::PLUGIN_UNITS;
use std::io::Write;

/// Print every discovered plugin and its description, in registry order.
pub fn list_plugins<H: Host>(host: &mut H) -> Result<()> {
    let mut registry = Registry::new();
    registry.discover(PLUGIN_UNITS)?;

    let width = registry.ids().map(str::len).max().unwrap_or(0);
    let mut out = host.output();
    for entry in registry.iter() {
        let _ = writeln!(out, "{:<width$}  {}", entry.id(), entry.description());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;

    #[test]
    fn test_lists_builtin_plugins_in_order() {
        let mut host = TestHost::new();
        list_plugins(&mut host).unwrap();

        let output = host.output_str();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("tabrisk_lib::plugins::row_count"));
        assert!(lines[1].starts_with("tabrisk_lib::plugins::similar_check"));
        assert!(lines[2].starts_with("tabrisk_lib::plugins::dcr"));
        assert!(!output.contains("hooks"));
    }
}

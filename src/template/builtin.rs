use crate::error::Result;
use crate::renderer::TemplateRenderer;

macro_rules! get_builtin(($path: literal) => {
    ($path, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path)))
});

pub const MANIFEST: &str = "Package.swift.j2";
pub const IGNORE: &str = "gitignore.j2";
pub const README: &str = "README.md.j2";
pub const DAY_PROTOCOL: &str = "AdventOfCodeDay.swift.j2";
pub const DAY: &str = "Day.swift.j2";
pub const DAY_TESTS: &str = "DayTests.swift.j2";
pub const ENTRY_POINT: &str = "AdventOfCode.swift.j2";

const STATIC_TEMPLATES: &[(&str, &str)] = &[
    get_builtin!("Package.swift.j2"),
    get_builtin!("gitignore.j2"),
    get_builtin!("README.md.j2"),
    get_builtin!("AdventOfCodeDay.swift.j2"),
    get_builtin!("Day.swift.j2"),
    get_builtin!("DayTests.swift.j2"),
    get_builtin!("AdventOfCode.swift.j2"),
];

/// Registers every built-in template under its file name.
pub fn register(engine: &mut dyn TemplateRenderer) -> Result<()> {
    for (name, source) in STATIC_TEMPLATES {
        engine.add_template(name, source)?;
    }
    Ok(())
}

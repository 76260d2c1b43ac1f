use crate::graph::Dependency;
use crate::index::{KnownFileIndex, parent_dir};
use crate::language::Ecosystem;
use crate::parser::python::PyRawImport;

/// Resolve one Python import against the known-file index.
///
/// Total: always returns a Dependency. Standard-library and third-party
/// imports come back unresolved, which is the expected outcome, not an error.
pub fn resolve_python_import(
    raw: &PyRawImport,
    source_file: &str,
    index: &KnownFileIndex,
) -> Dependency {
    let target_file = if raw.relative_level == 0 {
        resolve_absolute(&raw.module, index)
    } else {
        resolve_relative(raw, source_file, index)
    };

    Dependency {
        source_file: source_file.to_owned(),
        target_module: raw.display_module(),
        target_file,
        line: Some(raw.line),
        kind: raw.kind,
    }
}

/// Absolute dotted path, probed in order:
///
/// 1. package form `a/b/c/__init__.py` — packages shadow same-named modules,
///    a deliberate tie-break;
/// 2. top package `a/__init__.py` for multi-segment paths — importing
///    `a.b.c` is valid once the top package exists, even when the submodule
///    is not independently indexed;
/// 3. module form `a/b/c.py`.
fn resolve_absolute(module: &str, index: &KnownFileIndex) -> Option<String> {
    if module.is_empty() {
        return None;
    }
    let segments: Vec<&str> = module.split('.').collect();
    probe_dotted(&segments, "", index)
}

/// Relative import: walk up `level - 1` parents from the source file's
/// directory, then resolve the module part (or, for `from . import X`, the
/// imported name itself) rooted there.
fn resolve_relative(
    raw: &PyRawImport,
    source_file: &str,
    index: &KnownFileIndex,
) -> Option<String> {
    let base_dir = walk_up(parent_dir(source_file), raw.relative_level - 1)?;

    let name = if raw.module.is_empty() {
        raw.imported_name.as_deref()?
    } else {
        raw.module.as_str()
    };
    if name.is_empty() || name == "*" {
        return None;
    }

    let segments: Vec<&str> = name.split('.').collect();
    probe_rooted(&segments, base_dir, index)
}

/// Probe package form, top package, then module form (absolute imports).
fn probe_dotted(segments: &[&str], base_dir: &str, index: &KnownFileIndex) -> Option<String> {
    let package = join(base_dir, segments, Some("__init__.py"));
    if index.contains(Ecosystem::Python, &package) {
        return Some(package);
    }

    if segments.len() > 1 {
        let top = join(base_dir, &segments[..1], Some("__init__.py"));
        if index.contains(Ecosystem::Python, &top) {
            return Some(top);
        }
    }

    let module = module_form(base_dir, segments);
    index.contains(Ecosystem::Python, &module).then_some(module)
}

/// Probe package form then module form (relative imports — no top-package
/// fallback, the base directory is already pinned by the dot level).
fn probe_rooted(segments: &[&str], base_dir: &str, index: &KnownFileIndex) -> Option<String> {
    let package = join(base_dir, segments, Some("__init__.py"));
    if index.contains(Ecosystem::Python, &package) {
        return Some(package);
    }

    let module = module_form(base_dir, segments);
    index.contains(Ecosystem::Python, &module).then_some(module)
}

fn module_form(base_dir: &str, segments: &[&str]) -> String {
    let (last, dirs) = segments.split_last().expect("segments are non-empty");
    let mut path = join(base_dir, dirs, None);
    if !path.is_empty() {
        path.push('/');
    }
    path.push_str(last);
    path.push_str(".py");
    path
}

fn join(base_dir: &str, segments: &[&str], file: Option<&str>) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if !base_dir.is_empty() {
        parts.push(base_dir);
    }
    parts.extend_from_slice(segments);
    if let Some(f) = file {
        parts.push(f);
    }
    parts.join("/")
}

/// Walk `steps` directories up from `dir`. `None` means the path would
/// escape above the project root — treated as unresolvable, never an error.
fn walk_up(dir: &str, steps: usize) -> Option<&str> {
    let mut current = dir;
    for _ in 0..steps {
        if current.is_empty() {
            return None;
        }
        current = parent_dir(current);
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DependencyKind;

    fn py_index(paths: &[&str]) -> KnownFileIndex {
        let mut index = KnownFileIndex::default();
        for p in paths {
            index.insert(Ecosystem::Python, p);
        }
        index
    }

    fn direct(module: &str) -> PyRawImport {
        PyRawImport {
            module: module.to_owned(),
            relative_level: 0,
            imported_name: None,
            kind: DependencyKind::StaticImport,
            line: 1,
        }
    }

    fn from_import(module: &str, level: usize, name: &str) -> PyRawImport {
        PyRawImport {
            module: module.to_owned(),
            relative_level: level,
            imported_name: Some(name.to_owned()),
            kind: DependencyKind::FromImport,
            line: 1,
        }
    }

    #[test]
    fn test_absolute_module() {
        let index = py_index(&["main.py", "utils.py"]);
        let dep = resolve_python_import(&direct("utils"), "main.py", &index);
        assert_eq!(dep.target_file.as_deref(), Some("utils.py"));
    }

    #[test]
    fn test_absolute_package() {
        let index = py_index(&["main.py", "package/__init__.py"]);
        let dep = resolve_python_import(&direct("package"), "main.py", &index);
        assert_eq!(dep.target_file.as_deref(), Some("package/__init__.py"));
    }

    #[test]
    fn test_package_shadows_module() {
        let index = py_index(&["main.py", "pkg/__init__.py", "pkg.py"]);
        let dep = resolve_python_import(&direct("pkg"), "main.py", &index);
        assert_eq!(dep.target_file.as_deref(), Some("pkg/__init__.py"));
    }

    #[test]
    fn test_dotted_import_falls_back_to_top_package() {
        // `import package.mod1` links to the top package even though
        // package/mod1.py is indexed — the dotted import is satisfied by the
        // top package's __init__.
        let index = py_index(&["main.py", "utils.py", "package/__init__.py", "package/mod1.py"]);
        let dep = resolve_python_import(&direct("package.mod1"), "main.py", &index);
        assert_eq!(dep.target_file.as_deref(), Some("package/__init__.py"));
        assert_eq!(dep.target_module, "package.mod1");
    }

    #[test]
    fn test_dotted_import_module_form_without_top_package() {
        let index = py_index(&["main.py", "pkg/mod.py"]);
        let dep = resolve_python_import(&direct("pkg.mod"), "main.py", &index);
        assert_eq!(dep.target_file.as_deref(), Some("pkg/mod.py"));
    }

    #[test]
    fn test_from_absolute_resolves_base_module() {
        let index = py_index(&["main.py", "package/subpackage/__init__.py"]);
        let dep = resolve_python_import(
            &from_import("package.subpackage", 0, "mod2"),
            "main.py",
            &index,
        );
        assert_eq!(
            dep.target_file.as_deref(),
            Some("package/subpackage/__init__.py")
        );
        assert_eq!(dep.target_module, "package.subpackage.mod2");
    }

    #[test]
    fn test_from_dot_import_name() {
        // Scenario: `from . import utils` in main.py.
        let index = py_index(&["main.py", "utils.py"]);
        let dep = resolve_python_import(&from_import("", 1, "utils"), "main.py", &index);
        assert_eq!(dep.target_file.as_deref(), Some("utils.py"));
        assert_eq!(dep.target_module, ".utils");
    }

    #[test]
    fn test_from_dot_import_sibling_package() {
        let index = py_index(&["main.py", "package/__init__.py"]);
        let dep = resolve_python_import(&from_import("", 1, "package"), "main.py", &index);
        assert_eq!(dep.target_file.as_deref(), Some("package/__init__.py"));
    }

    #[test]
    fn test_from_dot_module_import() {
        // `from .utils import helper` in main.py.
        let index = py_index(&["main.py", "utils.py"]);
        let dep = resolve_python_import(&from_import("utils", 1, "helper"), "main.py", &index);
        assert_eq!(dep.target_file.as_deref(), Some("utils.py"));
        assert_eq!(dep.target_module, ".utils.helper");
    }

    #[test]
    fn test_parent_relative_import() {
        // `from .. import common` in package/mod1.py.
        let index = py_index(&["package/__init__.py", "package/mod1.py", "common.py"]);
        let dep = resolve_python_import(&from_import("", 2, "common"), "package/mod1.py", &index);
        assert_eq!(dep.target_file.as_deref(), Some("common.py"));
        assert_eq!(dep.target_module, "..common");
    }

    #[test]
    fn test_parent_relative_dotted_module() {
        // `from ..other import script` in package/mod1.py.
        let index = py_index(&["package/mod1.py", "other/script.py"]);
        let dep = resolve_python_import(
            &from_import("other.script", 2, "run"),
            "package/mod1.py",
            &index,
        );
        assert_eq!(dep.target_file.as_deref(), Some("other/script.py"));
    }

    #[test]
    fn test_relative_escaping_root_is_unresolved() {
        let index = py_index(&["main.py", "utils.py"]);
        // Level 2 from a root-level file walks above the project root.
        let dep = resolve_python_import(&from_import("", 2, "utils"), "main.py", &index);
        assert_eq!(dep.target_file, None);
    }

    #[test]
    fn test_stdlib_import_is_unresolved() {
        let index = py_index(&["main.py", "utils.py"]);
        let dep = resolve_python_import(&direct("os"), "main.py", &index);
        assert_eq!(dep.target_file, None);
        assert_eq!(dep.target_module, "os");
        assert_eq!(dep.kind, DependencyKind::StaticImport);
    }

    #[test]
    fn test_unresolved_relative_sibling() {
        let index = py_index(&["main.py"]);
        let dep = resolve_python_import(&from_import("", 1, "missing"), "main.py", &index);
        assert_eq!(dep.target_file, None);
        assert_eq!(dep.target_module, ".missing");
    }

    #[test]
    fn test_wildcard_from_dot_is_unresolved() {
        let index = py_index(&["main.py", "utils.py"]);
        let dep = resolve_python_import(&from_import("", 1, "*"), "main.py", &index);
        assert_eq!(dep.target_file, None);
    }
}

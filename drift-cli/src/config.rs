//! CLI 配置
//!
//! 读取可选的 `drift.json` 项目文件，并与命令行参数合并。

use drift_api::{DriftError, LogLevel, ScannerConfig, SeekStrategy};
use drift_vfs::{VfsError, VirtualFileSystem};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 默认项目文件名
pub const DEFAULT_PROJECT_FILE: &str = "drift.json";

/// drift.json 结构
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectFile {
    /// 变更日志路径（相对于项目文件所在目录）
    pub changelog: Option<String>,
    /// 扫描器配置
    pub scanner: Option<ScannerConfig>,
    /// 日志级别: "silent", "error", "warn", "info", "debug", "trace"
    pub log_level: Option<LogLevel>,
    /// 是否输出空白和注释
    pub include_trivia: Option<bool>,
}

/// 命令行上给出的覆盖项
#[derive(Debug, Default)]
pub struct Overrides {
    pub changelog: Option<PathBuf>,
    pub include_trivia: bool,
    pub seek: Option<SeekStrategy>,
    pub log_level: Option<LogLevel>,
}

/// 合并后的最终设置
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub changelog: PathBuf,
    pub scanner: ScannerConfig,
    pub include_trivia: bool,
    pub log_level: LogLevel,
}

/// 读取项目文件
///
/// `explicit` 为假时文件缺失不算错误（默认的 drift.json 是可选的）。
pub fn read_project_file(
    path: &Path,
    fs: &dyn VirtualFileSystem,
    explicit: bool,
) -> Result<Option<ProjectFile>, DriftError> {
    let content = match fs.read_file(path) {
        Ok(content) => content,
        Err(VfsError::NotFound { .. }) if !explicit => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let project: ProjectFile = serde_json::from_slice(&content)
        .map_err(|e| DriftError::Config(format!("failed to parse '{}': {}", path.display(), e)))?;

    if project.changelog.as_deref() == Some("") {
        return Err(DriftError::Config(format!(
            "'changelog' in '{}' must not be empty",
            path.display()
        )));
    }
    Ok(Some(project))
}

/// 命令行优先，其次项目文件，最后默认值
pub fn resolve(
    project_path: &Path,
    project: Option<ProjectFile>,
    overrides: Overrides,
) -> Result<Settings, DriftError> {
    let project = project.unwrap_or_default();

    let changelog = match (overrides.changelog, project.changelog) {
        (Some(path), _) => path,
        (None, Some(entry)) => resolve_entry_path(project_path, &entry),
        (None, None) => {
            return Err(DriftError::Config(format!(
                "no changelog given and '{}' does not name one",
                project_path.display()
            )))
        }
    };

    let mut scanner = project.scanner.unwrap_or_default();
    if let Some(seek) = overrides.seek {
        scanner.seek_strategy = seek;
    }

    Ok(Settings {
        changelog,
        scanner,
        include_trivia: overrides.include_trivia || project.include_trivia.unwrap_or(false),
        log_level: overrides
            .log_level
            .or(project.log_level)
            .unwrap_or_default(),
    })
}

/// Resolve changelog path relative to the project file's directory
fn resolve_entry_path(project_path: &Path, entry: &str) -> PathBuf {
    let base_dir = project_path.parent().unwrap_or(Path::new("."));
    base_dir.join(entry)
}

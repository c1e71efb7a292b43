use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// 初始化文件日志（终端被 TUI 占用，日志只写文件）
///
/// 默认级别为 info，可通过 `RUST_LOG` 覆盖。
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)))
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("File logger initialized at {}", path.display());
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

use crate::models::Scope;

#[derive(Parser, Debug)]
#[command(name = "voltdesk")]
#[command(about = "电压设备管理终端", long_about = None)]
pub struct Cli {
    /// 配置文件路径（默认: ~/.config/voltdesk/config.toml）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 接口地址，覆盖配置文件中的 base_url
    #[arg(long)]
    pub base_url: Option<String>,

    /// 日志文件路径
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// 只显示该变电站下的设备
    #[arg(long, value_name = "ID", conflicts_with = "transbox")]
    pub substation: Option<String>,

    /// 只显示该箱变下的设备
    #[arg(long, value_name = "ID")]
    pub transbox: Option<String>,
}

impl Cli {
    pub fn scope(&self) -> Scope {
        match (&self.substation, &self.transbox) {
            (Some(id), _) => Scope::Substation(id.clone()),
            (None, Some(id)) => Scope::TransformerBox(id.clone()),
            (None, None) => Scope::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_args() {
        let cli = Cli::parse_from(["voltdesk", "--substation", "sub-1"]);
        assert_eq!(cli.scope(), Scope::Substation("sub-1".to_string()));

        let cli = Cli::parse_from(["voltdesk", "--transbox", "box-7"]);
        assert_eq!(cli.scope(), Scope::TransformerBox("box-7".to_string()));

        let cli = Cli::parse_from(["voltdesk"]);
        assert_eq!(cli.scope(), Scope::None);
    }

    #[test]
    fn test_scopes_are_exclusive() {
        let result = Cli::try_parse_from(["voltdesk", "--substation", "a", "--transbox", "b"]);
        assert!(result.is_err());
    }
}

use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use genie_bridge::{convert_document, init_logging, load_config, run_migration};
use genie_bridge::{ConvertOptions, EntityKind, Target};
use genie_bridge_config::{LogConfig, OutputFormat};
use genie_bridge_core::CommandArgsMode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "genie-bridge")]
#[command(version = "1.0.0")]
#[command(about = "Genie 资源模式转换与命令参数迁移工具")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 日志级别，覆盖配置文件
    #[arg(short, long, global = true, value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: Option<String>,

    /// 日志格式，覆盖配置文件
    #[arg(long, global = true, value_parser = ["json", "pretty"])]
    log_format: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 在旧模式和结构化模式之间转换一个JSON文档
    Convert {
        /// 实体类型
        #[arg(short, long, value_enum)]
        entity: EntityKind,
        /// 转换方向
        #[arg(short, long, value_enum)]
        to: Target,
        /// 输入文件，缺省时从标准输入读取
        #[arg(short, long)]
        input: Option<String>,
        /// 按空白和引号拆分作业参数，而不是整体作为一个参数
        #[arg(long)]
        tokenize_args: bool,
    },
    /// 把命令表中的可执行字符串迁移到参数表
    MigrateExecutables {
        /// 配置文件路径
        #[arg(short, long)]
        config: Option<String>,
        /// 迁移前创建缺失的表
        #[arg(long)]
        ensure_schema: bool,
    },
}

impl Cli {
    fn logging(&self, configured: &LogConfig) -> Result<(String, OutputFormat)> {
        let level = self
            .log_level
            .clone()
            .unwrap_or_else(|| configured.level.to_string());
        let format = match &self.log_format {
            Some(format) => format
                .parse::<OutputFormat>()
                .map_err(|e| anyhow::anyhow!(e))?,
            None => configured.format,
        };
        Ok((level, format))
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("读取输入文件失败: {path}"))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("读取标准输入失败")?;
            Ok(buffer)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Convert {
            entity,
            to,
            input,
            tokenize_args,
        } => {
            let (level, format) = cli.logging(&LogConfig::default())?;
            init_logging(&level, format)?;

            let document = read_input(input.as_deref())?;
            let options = ConvertOptions {
                entity: *entity,
                target: *to,
                command_args: if *tokenize_args {
                    CommandArgsMode::Tokenize
                } else {
                    CommandArgsMode::Verbatim
                },
            };
            println!("{}", convert_document(&document, options)?);
        }
        Commands::MigrateExecutables {
            config,
            ensure_schema,
        } => {
            let app_config = load_config(config.as_deref())?;
            let (level, format) = cli.logging(&app_config.logging)?;
            init_logging(&level, format)?;

            let report = run_migration(&app_config, *ensure_schema).await?;
            info!("迁移结果: {:?}", report);
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("序列化迁移结果失败")?
            );
        }
    }

    Ok(())
}

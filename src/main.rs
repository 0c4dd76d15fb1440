//! 命令行入口
//!
//! 不接受任何参数：读取当前目录下的 `course-data.csv`，写出 `courses_seed.sql`。
//! 成功退出码为 0，任何致命错误打印到 stderr 并以 1 退出。

use std::process::ExitCode;

use course_seed_sql::{ConvertConfig, convert_file};
use tracing::Level;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = ConvertConfig::default();
    match convert_file(&config) {
        Ok(summary) => {
            println!(
                "Generated {} INSERT statements in {} ({} rows skipped)",
                summary.statements_written,
                config.output_path.display(),
                summary.rows_skipped
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error converting course data: {err}");
            ExitCode::FAILURE
        }
    }
}

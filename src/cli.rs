use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "アートポートフォリオのギャラリーデータ確認・閲覧ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 2つのJSONドキュメントと画像ファイルを検証
    Check {
        /// サイトのフォルダ、または http(s):// のベースURL
        source: Option<String>,
    },

    /// コレクションと作品をフラットインデックス付きで一覧表示
    List {
        /// サイトのフォルダ、または http(s):// のベースURL
        source: Option<String>,
    },

    /// 端末上のライトボックスで作品を順に閲覧
    Browse {
        /// サイトのフォルダ、または http(s):// のベースURL
        source: Option<String>,

        /// 最初に表示するフラットインデックス
        #[arg(short, long, default_value = "0")]
        start: usize,
    },

    /// 設定管理
    Config {
        /// 既定のソースを設定
        #[arg(long)]
        source: Option<String>,

        /// 取得タイムアウト（秒）を設定
        #[arg(long)]
        timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

/// ワークスペース内にファイルを作成する（親ディレクトリも作成）
///
/// # Arguments
/// * `root` - ワークスペースのルートパス
/// * `relative` - ルートからの相対パス（例: "locales/zh.json"）
/// * `content` - ファイル内容
pub(crate) fn write_workspace_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

use proc_macro::TokenStream;

mod command;
mod derive_utils;

/// 命令宏
/// 为结构体实现 `::commander::command::Command`：
/// - `#[command(output = Type)]` 指定结果类型，缺省为 `::commander::Unit`
/// - `#[command(name = "...")]` 指定稳定名称，缺省为结构体名
/// - `#[command(debug = false)]` 不自动派生 `Debug`（默认派生）
#[proc_macro_attribute]
pub fn command(attr: TokenStream, item: TokenStream) -> TokenStream {
    command::expand(attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

use crate::derive_utils::apply_derives;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Ident, Item, LitBool, LitStr, Result as SynResult, Token, Type, parse::Parse,
    parse::ParseStream, spanned::Spanned,
};

/// #[command] 宏实现
/// - 保留结构体定义，默认合并派生 `Debug`
/// - 生成 `::commander::command::Command` 实现（`NAME` 与 `Output`）
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> SynResult<TokenStream> {
    let cfg: CommandAttrConfig = syn::parse2(attr)?;
    let mut st = match syn::parse2::<Item>(item)? {
        Item::Struct(s) => s,
        other => return Err(syn::Error::new(other.span(), "#[command] only on struct")),
    };

    let required: Vec<syn::Path> = if cfg.debug {
        vec![syn::parse_quote!(Debug)]
    } else {
        Vec::new()
    };
    apply_derives(&mut st.attrs, required);

    let ident = &st.ident;
    let name = cfg
        .name
        .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));
    let output = cfg
        .output
        .unwrap_or_else(|| syn::parse_quote! { ::commander::Unit });
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    Ok(quote! {
        #st

        impl #impl_generics ::commander::command::Command for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            type Output = #output;
        }
    })
}

// 解析 command 宏键值参数：output = <Type>、name = "<str>"、debug = <bool>
struct CommandAttrConfig {
    output: Option<Type>,
    name: Option<LitStr>,
    debug: bool,
}

impl Parse for CommandAttrConfig {
    fn parse(input: ParseStream) -> SynResult<Self> {
        let mut output: Option<Type> = None;
        let mut name: Option<LitStr> = None;
        let mut debug: Option<LitBool> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            let _eq: Token![=] = input.parse()?;
            let duplicate = || {
                syn::Error::new(key.span(), format!("duplicate key '{key}' in attribute"))
            };

            match key.to_string().as_str() {
                "output" => {
                    if output.is_some() {
                        return Err(duplicate());
                    }
                    output = Some(input.parse()?);
                }
                "name" => {
                    if name.is_some() {
                        return Err(duplicate());
                    }
                    name = Some(input.parse()?);
                }
                "debug" => {
                    if debug.is_some() {
                        return Err(duplicate());
                    }
                    debug = Some(input.parse()?);
                }
                _ => {
                    return Err(syn::Error::new(
                        key.span(),
                        "unknown key; expected 'output' | 'name' | 'debug'",
                    ));
                }
            }

            if input.is_empty() {
                break;
            }
            let _comma: Token![,] = input.parse()?;
        }

        Ok(Self {
            output,
            name,
            debug: debug.map(|b| b.value).unwrap_or(true),
        })
    }
}

use quote::ToTokens;
use syn::{Attribute, Token};

// 提取非 derive 属性与已有 derive 列表
pub(crate) fn split_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<syn::Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs.iter() {
        if attr.path().is_ident("derive") {
            if let Ok(list) = attr.parse_args_with(
                syn::punctuated::Punctuated::<syn::Path, Token![,]>::parse_terminated,
            ) {
                existing.extend(list);
            }
        } else {
            retained.push(attr.clone());
        }
    }
    (retained, existing)
}

// 合并默认与已有 derive（去重，优先保留 required）
pub(crate) fn merge_derives(existing: Vec<syn::Path>, required: Vec<syn::Path>) -> Attribute {
    let mut seen = std::collections::HashSet::<String>::new();
    let mut final_list: Vec<syn::Path> = Vec::new();
    for p in required.into_iter().chain(existing) {
        if seen.insert(derive_key(&p)) {
            final_list.push(p);
        }
    }
    syn::parse_quote!(#[derive(#(#final_list),*)])
}

// 归一化 derive 的 key，避免 Debug/std::fmt::Debug 重复
pub(crate) fn derive_key(p: &syn::Path) -> String {
    match p.segments.last() {
        Some(last) => last.ident.to_string(),
        None => p.to_token_stream().to_string(),
    }
}

// 直接在 attrs 上应用默认派生合并；无任何 derive 时保持原样
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    let (retained, existing) = split_derives(attrs);
    if required.is_empty() && existing.is_empty() {
        return;
    }
    let merged = merge_derives(existing, required);
    *attrs = std::iter::once(merged).chain(retained).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_without_duplicates() {
        let mut attrs: Vec<Attribute> = vec![
            syn::parse_quote!(#[derive(Clone, std::fmt::Debug)]),
            syn::parse_quote!(#[allow(dead_code)]),
        ];
        apply_derives(&mut attrs, vec![syn::parse_quote!(Debug)]);

        assert_eq!(attrs.len(), 2);
        let (_, derives) = split_derives(&attrs);
        let keys: Vec<String> = derives.iter().map(derive_key).collect();
        assert_eq!(keys, vec!["Debug", "Clone"]);
    }

    #[test]
    fn leaves_attrs_untouched_without_derives() {
        let mut attrs: Vec<Attribute> = vec![syn::parse_quote!(#[allow(dead_code)])];
        apply_derives(&mut attrs, Vec::new());
        assert_eq!(attrs.len(), 1);
    }
}

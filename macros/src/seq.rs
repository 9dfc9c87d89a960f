use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    Expr, Ident, Pat, Token, Type, braced, bracketed,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

pub fn build_seq_impl(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input as Invocation);

    let expander = Expander {
        krate: invocation.krate,
        builder: invocation.builder,
    };
    expander.block(&invocation.items).into()
}

/// `[<core crate path>] <Builder type>; <items>`
struct Invocation {
    krate: TokenStream2,
    builder: Type,
    items: Vec<Item>,
}

impl Parse for Invocation {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let krate;
        bracketed!(krate in input);
        let krate: TokenStream2 = krate.parse()?;
        let builder: Type = input.parse()?;
        input.parse::<Token![;]>()?;
        let items = parse_items(input)?;
        Ok(Invocation {
            krate,
            builder,
            items,
        })
    }
}

enum Item {
    /// `expr`
    Element(Expr),
    /// `..expr`
    Splice(Expr),
    /// `if cond { .. }`, with optional `else { .. }` or `else if ..`
    If(Conditional),
    /// `for pat in iter { .. }`
    For { pat: Pat, iter: Expr, body: Vec<Item> },
}

struct Conditional {
    condition: Condition,
    then: Vec<Item>,
    otherwise: Option<Otherwise>,
}

enum Condition {
    Bool(Expr),
    Let { pat: Pat, scrutinee: Expr },
}

enum Otherwise {
    Block(Vec<Item>),
    If(Box<Conditional>),
}

/// Comma separated items. The comma after a braced item (`if`, `for`) is
/// optional; a trailing comma is allowed.
fn parse_items(input: ParseStream) -> syn::Result<Vec<Item>> {
    let mut items = Vec::new();
    while !input.is_empty() {
        let braced_item = input.peek(Token![if]) || input.peek(Token![for]);
        let item = if input.peek(Token![if]) {
            Item::If(parse_conditional(input)?)
        } else if input.peek(Token![for]) {
            parse_for(input)?
        } else if input.peek(Token![..]) {
            input.parse::<Token![..]>()?;
            Item::Splice(input.parse()?)
        } else {
            Item::Element(input.parse()?)
        };
        items.push(item);

        if input.is_empty() {
            break;
        }
        if braced_item {
            input.parse::<Option<Token![,]>>()?;
        } else {
            input.parse::<Token![,]>()?;
        }
    }
    Ok(items)
}

fn parse_block(input: ParseStream) -> syn::Result<Vec<Item>> {
    let content;
    braced!(content in input);
    parse_items(&content)
}

fn parse_conditional(input: ParseStream) -> syn::Result<Conditional> {
    input.parse::<Token![if]>()?;
    let condition = if input.peek(Token![let]) {
        input.parse::<Token![let]>()?;
        let pat = Pat::parse_multi_with_leading_vert(input)?;
        input.parse::<Token![=]>()?;
        let scrutinee = Expr::parse_without_eager_brace(input)?;
        Condition::Let { pat, scrutinee }
    } else {
        Condition::Bool(Expr::parse_without_eager_brace(input)?)
    };
    let then = parse_block(input)?;

    let otherwise = if input.parse::<Option<Token![else]>>()?.is_some() {
        if input.peek(Token![if]) {
            Some(Otherwise::If(Box::new(parse_conditional(input)?)))
        } else {
            Some(Otherwise::Block(parse_block(input)?))
        }
    } else {
        None
    };

    Ok(Conditional {
        condition,
        then,
        otherwise,
    })
}

fn parse_for(input: ParseStream) -> syn::Result<Item> {
    input.parse::<Token![for]>()?;
    let pat = Pat::parse_single(input)?;
    input.parse::<Token![in]>()?;
    let iter = Expr::parse_without_eager_brace(input)?;
    let body = parse_block(input)?;
    Ok(Item::For { pat, iter, body })
}

/// `(expr)` and `expr` mean the same thing as a condition or iterable.
fn strip_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => strip_parens(&paren.expr),
        other => other,
    }
}

struct Expander {
    krate: TokenStream2,
    builder: Type,
}

impl Expander {
    fn rules(&self) -> TokenStream2 {
        let krate = &self.krate;
        let builder = &self.builder;
        quote!(<#builder as #krate::builder::SequenceBuilder>)
    }

    /// One block becomes a single `build_array` over its parts. Runs of plain
    /// elements are batched into one `build_block`.
    fn block(&self, items: &[Item]) -> TokenStream2 {
        let rules = self.rules();
        let mut parts = Vec::new();
        let mut run: Vec<&Expr> = Vec::new();

        for item in items {
            if let Item::Element(expr) = item {
                run.push(expr);
                continue;
            }
            self.flush(&mut run, &mut parts);
            parts.push(self.item(item));
        }
        self.flush(&mut run, &mut parts);

        match parts.as_slice() {
            [] => quote!(#rules::build_block(::core::iter::empty())),
            [single] => single.clone(),
            _ => quote!(#rules::build_array([#(#parts),*])),
        }
    }

    fn flush(&self, run: &mut Vec<&Expr>, parts: &mut Vec<TokenStream2>) {
        if run.is_empty() {
            return;
        }
        let rules = self.rules();
        let elements: Vec<&Expr> = run.drain(..).collect();
        parts.push(quote!(#rules::build_block([#(#elements),*])));
    }

    fn item(&self, item: &Item) -> TokenStream2 {
        let rules = self.rules();
        match item {
            Item::Element(expr) => quote!(#rules::build_block([#expr])),
            Item::Splice(expr) => quote!(#rules::build_block(#expr)),
            Item::If(conditional) => self.conditional(conditional),
            Item::For { pat, iter, body } => {
                let iter = strip_parens(iter);
                let body = self.block(body);
                quote!(#rules::build_array(
                    ::core::iter::Iterator::map(
                        ::core::iter::IntoIterator::into_iter(#iter),
                        |#pat| #body,
                    )
                ))
            }
        }
    }

    fn conditional(&self, conditional: &Conditional) -> TokenStream2 {
        let rules = self.rules();
        let krate = &self.krate;
        let then = self.block(&conditional.then);

        match &conditional.otherwise {
            None => {
                let chosen = branch(
                    &conditional.condition,
                    quote!(::core::option::Option::Some(#then)),
                    quote!(::core::option::Option::None),
                );
                quote!(#rules::build_optional(#chosen))
            }
            Some(otherwise) => {
                let otherwise = match otherwise {
                    Otherwise::Block(items) => self.block(items),
                    Otherwise::If(nested) => self.conditional(nested),
                };
                let chosen = branch(
                    &conditional.condition,
                    quote!(#krate::either::Either::First(#then)),
                    quote!(#krate::either::Either::Second(#otherwise)),
                );
                quote!(#rules::build_either(#chosen))
            }
        }
    }
}

/// Only the taken branch is evaluated.
fn branch(condition: &Condition, then: TokenStream2, otherwise: TokenStream2) -> TokenStream2 {
    match condition {
        Condition::Bool(expr) => {
            let expr = strip_parens(expr);
            let flag = Ident::new("condition", Span::mixed_site());
            quote!({
                let #flag: bool = #expr;
                if #flag { #then } else { #otherwise }
            })
        }
        Condition::Let { pat, scrutinee } => {
            quote!(if let #pat = #scrutinee { #then } else { #otherwise })
        }
    }
}

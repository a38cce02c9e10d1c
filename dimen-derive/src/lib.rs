//! Derive macro implementation used by `dimen-core`.
//!
//! `dimen-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::Ratio`, `crate::Representation` and `crate::Quantity`, so it is intended to be used by
//! `dimen-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `dimen` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`
//! - `core::fmt::Display for crate::Quantity<MyUnit, R>` for every displayable representation `R` (formats as
//!   `<value> <symbol>`)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `dimension = SomeTag`: dimension tag type
//! - `ratio = ...`: exact scale relative to the coherent reference unit, written as an integer (`1000`), an integer
//!   fraction (`1 / 1000`) or any constant expression of type `Ratio` (`Ratio::KILO`). Floating-point literals are
//!   rejected.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, BinOp, DeriveInput, Expr, ExprBinary, ExprLit, Ident, Lit, LitInt, LitStr,
    Token, Type,
};

/// Derive `crate::Unit` and a `Display` impl for `crate::Quantity<ThisUnit, R>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `ratio`.
///
/// This macro is intended for use by `dimen-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let ratio = ratio_tokens(&unit_attr.ratio)?;

    let expanded = quote! {
        impl crate::Unit for #name {
            const RATIO: crate::Ratio = #ratio;
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
        }

        impl<R> ::core::fmt::Display for crate::Quantity<#name, R>
        where
            R: crate::Representation + ::core::fmt::Display,
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{} {}", self.value(), <#name as crate::Unit>::SYMBOL)
            }
        }
    };

    Ok(expanded)
}

/// Turns the `ratio = ...` expression into a `crate::Ratio` constant expression.
fn ratio_tokens(ratio: &Expr) -> syn::Result<TokenStream2> {
    match ratio {
        Expr::Lit(ExprLit { lit: Lit::Int(n), .. }) => Ok(quote! { crate::Ratio::new(#n, 1) }),
        Expr::Binary(ExprBinary {
            left,
            op: BinOp::Div(_),
            right,
            ..
        }) => match (int_literal(left), int_literal(right)) {
            (Some(n), Some(d)) => Ok(quote! { crate::Ratio::new(#n, #d) }),
            _ => Ok(quote! { #ratio }),
        },
        Expr::Lit(ExprLit { lit: Lit::Float(lit), .. }) => Err(syn::Error::new(
            lit.span(),
            "ratio must be exact: use an integer, an integer fraction `N / D`, or a `Ratio` expression",
        )),
        other => Ok(quote! { #other }),
    }
}

fn int_literal(expr: &Expr) -> Option<&LitInt> {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Int(n), .. }) => Some(n),
        Expr::Paren(inner) => int_literal(&inner.expr),
        _ => None,
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Type,
    ratio: Expr,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Type> = None;
        let mut ratio: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            ratio,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

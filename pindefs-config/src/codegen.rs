//! Rust code generation from pin declarations
//!
//! Emits one `pub const` per pin. The constants re-run
//! `PinConfig::new` at compile time in the consuming crate, so a generated
//! module can never hold a configuration the model rejects.

use pindefs::{vocabulary, ActiveLevel};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::declarations::{PinDeclaration, PinDeclarations};
use crate::error::{ConfigError, PinIssue};

const HEADER: &str = "// @generated by pindefs-config. Do not edit.\n\n";

/// Generate a module body for `pins`
///
/// Labels that collide with the reserved pin vocabulary are rejected so
/// the generated constants cannot shadow or be confused with enum
/// variants once glob-imported.
pub fn generate_module(pins: &PinDeclarations) -> Result<String, ConfigError> {
    let issues: Vec<PinIssue> = pins
        .iter()
        .filter_map(|pin| {
            vocabulary::collision(&pin.label).map(|reserved| PinIssue::ReservedLabel {
                label: pin.label.clone(),
                reserved,
            })
        })
        .collect();
    if !issues.is_empty() {
        return Err(issues.into());
    }

    let constants = pins.iter().map(pin_constant);
    let file: syn::File = syn::parse2(quote! { #(#constants)* })?;

    Ok(format!("{}{}", HEADER, prettyplease::unparse(&file)))
}

fn pin_constant(pin: &PinDeclaration) -> TokenStream {
    let name = format_ident!("{}", pin.const_name());
    let mode = format_ident!("{}", pin.config.mode().ident());
    let level = format_ident!("{}", pin.config.active_level().ident());

    let inverted = if pin.config.active_level() == ActiveLevel::ActiveLow {
        "!"
    } else {
        ""
    };
    let doc = format!(" `{}{}` ({})", inverted, pin.pin, pin.config.mode());
    let message = format!("invalid configuration for {}", name);

    quote! {
        #[doc = #doc]
        pub const #name: ::pindefs::PinConfig = match ::pindefs::PinConfig::new(
            ::pindefs::PinMode::#mode,
            ::pindefs::ActiveLevel::#level,
        ) {
            Ok(config) => config,
            Err(_) => panic!(#message),
        };
    }
}

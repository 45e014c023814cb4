use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Error};

/// Implements `MultiownableInterface` for a contract by delegating to `multiownable_std::interfaces`.
///
/// The contract must implement `multiownable_std::interfaces::WitnessCheck`, which decides whether
/// an invocation may act as a given owner.
///
/// ```ignore
/// #[multiownable]
/// #[contract]
/// pub struct Contract;
///
/// impl WitnessCheck for Contract {
///     fn check_witness(_env: &Env, identity: &Address) -> bool {
///         identity.require_auth();
///         true
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn multiownable(attr: TokenStream, input: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return Error::new(
            TokenStream2::from(attr).into_iter().next().map_or_else(
                proc_macro2::Span::call_site,
                |token| token.span(),
            ),
            "`multiownable` takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let expanded = quote! {
        use multiownable_std::interfaces::MultiownableInterface;

        #input

        #[soroban_sdk::contractimpl]
        impl multiownable_std::interfaces::MultiownableInterface for #name {
            fn number_of_owners(env: &soroban_sdk::Env) -> u32 {
                multiownable_std::interfaces::number_of_owners(env)
            }

            fn owner_by_index(env: &soroban_sdk::Env, index: u32) -> Option<soroban_sdk::Address> {
                multiownable_std::interfaces::owner_by_index(env, index)
            }

            fn index_by_owner(env: &soroban_sdk::Env, owner: soroban_sdk::Address) -> u32 {
                multiownable_std::interfaces::index_by_owner(env, &owner)
            }

            fn generation_of_owners(env: &soroban_sdk::Env) -> u64 {
                multiownable_std::interfaces::generation_of_owners(env)
            }

            fn all_owners(env: &soroban_sdk::Env) -> soroban_sdk::Vec<soroban_sdk::Address> {
                multiownable_std::interfaces::all_owners(env)
            }

            fn is_owner(env: &soroban_sdk::Env, account: soroban_sdk::Address) -> bool {
                multiownable_std::interfaces::is_owner(env, &account)
            }

            fn transfer_ownership(
                env: &soroban_sdk::Env,
                initiator: soroban_sdk::Address,
                new_owners: soroban_sdk::Vec<soroban_sdk::Address>,
            ) -> bool {
                multiownable_std::interfaces::transfer_ownership::<Self>(env, initiator, new_owners)
            }

            fn call(
                env: &soroban_sdk::Env,
                initiator: soroban_sdk::Address,
                function_signature: soroban_sdk::String,
                required_votes: u32,
                timeout: u64,
                args: soroban_sdk::Vec<soroban_sdk::Bytes>,
            ) -> bool {
                multiownable_std::interfaces::call::<Self>(
                    env,
                    initiator,
                    function_signature,
                    required_votes,
                    timeout,
                    args,
                )
            }

            fn cancel_call(
                env: &soroban_sdk::Env,
                initiator: soroban_sdk::Address,
                function_signature: soroban_sdk::String,
                required_votes: u32,
                timeout: u64,
                args: soroban_sdk::Vec<soroban_sdk::Bytes>,
            ) -> bool {
                multiownable_std::interfaces::cancel_call::<Self>(
                    env,
                    initiator,
                    function_signature,
                    required_votes,
                    timeout,
                    args,
                )
            }

            fn invoke(
                env: &soroban_sdk::Env,
                operation: soroban_sdk::Symbol,
                args: soroban_sdk::Vec<soroban_sdk::Val>,
            ) -> soroban_sdk::Val {
                multiownable_std::interfaces::invoke::<Self>(env, operation, args)
            }
        }
    };

    TokenStream::from(expanded)
}

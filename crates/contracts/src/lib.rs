//! Alloy bindings for the vendored contract artifacts used by the deployment
//! helpers. Artifacts live in `./artifacts` and are refreshed with the
//! `vendor` binary instead of being fetched at build time.

#[cfg(feature = "bin")]
pub mod paths;

#[macro_export]
macro_rules! bindings {
    ($contract:ident) => {
        paste::paste! {
            // Generate the main bindings in a private module so that the
            // public module can re-export all items under a stable name and
            // add an `Instance` alias fixed to the erased provider type.
            #[allow(non_snake_case)]
            mod [<$contract Private>] {
                alloy::sol!(
                    #[allow(missing_docs)]
                    #[sol(rpc)]
                    $contract,
                    concat!("./artifacts/", stringify!($contract), ".json"),
                );
            }

            #[allow(non_snake_case)]
            pub mod $contract {
                use alloy::providers::DynProvider;

                pub use super::[<$contract Private>]::*;
                pub type Instance = $contract::[<$contract Instance>]<DynProvider>;
            }
        }
    };
}

bindings!(MockV3Aggregator);

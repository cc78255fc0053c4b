use dconf_core::{GrammarArtifact, LanguageRegistry, LoadError};

macro_rules! define_grammars {
    (
        $(
            $fn_name:ident => {
                feature: $feature:literal,
                names: [$($alias:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        // Artifacts are encoded by the build script
        $(
            #[cfg(feature = $feature)]
            paste::paste! {
                pub static [<$fn_name:upper>]: GrammarArtifact = GrammarArtifact::from_static(
                    stringify!($fn_name),
                    include_bytes!(concat!(env!("OUT_DIR"), "/", stringify!($fn_name), ".grammar")),
                );

                pub fn $fn_name() -> &'static GrammarArtifact {
                    &[<$fn_name:upper>]
                }
            }
        )*

        /// Built-in artifact by grammar name or alias, ignoring case.
        pub fn artifact(name: &str) -> Option<&'static GrammarArtifact> {
            match name.to_ascii_lowercase().as_str() {
                $(
                    #[cfg(feature = $feature)]
                    $($alias)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        pub fn all() -> Vec<&'static GrammarArtifact> {
            vec![
                $(
                    #[cfg(feature = $feature)]
                    $fn_name(),
                )*
            ]
        }

        /// Register every built-in grammar and its aliases.
        pub fn register_all(registry: &mut LanguageRegistry) -> Result<(), LoadError> {
            $(
                #[cfg(feature = $feature)]
                {
                    let language = registry.register($fn_name())?;
                    $(registry.alias($alias, language.name());)*
                }
            )*
            Ok(())
        }
    };
}

define_grammars! {
    dconfdwl => {
        feature: "grammar-dwl",
        names: ["dconfdwl", "dwl"],
    },
    dconfsomebar => {
        feature: "grammar-somebar",
        names: ["dconfsomebar", "somebar"],
    },
}

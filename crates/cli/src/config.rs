// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::Result;
use crate::options;
pub use dirtally_engine::config::{Config, ConfigBuilder};
use dirtally_engine::options as engine_options;

impl TryFrom<&Args> for Config {
    type Error = crate::error::AppError;

    fn try_from(args: &Args) -> Result<Self> {
        let mode: engine_options::Mode = args.mode.into();
        let config = ConfigBuilder::default()
            .root(args.path.clone())
            .mode(mode)
            .build()
            .map_err(dirtally_engine::error::EngineError::from)?;
        Ok(config)
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::Mode, engine_options::Mode, Sequential, Parallel, Both);

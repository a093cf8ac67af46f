//! Transient invocation records.
//!
//! An [`Invocation`] captures one wrapped call (target name, rendered
//! positional arguments, keyword pairs), lives long enough to format the
//! trace record, and is then discarded.

use std::fmt;

/// How an argument bundle presents itself in a trace record.
///
/// Tuples render positionally. Argument types carrying named options can
/// override [`CallArguments::keywords`] to surface them as keyword pairs.
pub trait CallArguments: fmt::Debug {
    /// Named arguments for the record; positional-only bundles return none.
    fn keywords(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

macro_rules! positional_arguments {
    ($($name:ident),*) => {
        impl<$($name: fmt::Debug),*> CallArguments for ($($name,)*) {}
    };
}

positional_arguments!();
positional_arguments!(A);
positional_arguments!(A, B);
positional_arguments!(A, B, C);
positional_arguments!(A, B, C, D);
positional_arguments!(A, B, C, D, E);
positional_arguments!(A, B, C, D, E, F);

/// One wrapped call, captured before the call runs.
#[derive(Debug)]
pub struct Invocation {
    target: String,
    args: String,
    kwargs: Vec<(&'static str, String)>,
}

impl Invocation {
    /// Render the target name and arguments ahead of the call.
    pub fn capture<A: CallArguments>(target: &str, args: &A) -> Self {
        Self {
            target: target.to_owned(),
            args: format!("{args:?}"),
            kwargs: args.keywords(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Calling {} with args: {}, kwargs: {{",
            self.target, self.args
        )?;
        for (index, (key, value)) in self.kwargs.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

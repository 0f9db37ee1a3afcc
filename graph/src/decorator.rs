//! The `Decorator` capability and its three implementations.

use crate::factory::Info;

/// The interface every bound implementation satisfies.
pub trait Decorator: Send + Sync {
  fn decorate(&self) -> String;

  /// Type name used in diagnostics.
  fn name(&self) -> &'static str;
}

macro_rules! greeting_decorator {
  ($name:ident, $greeting:literal) => {
    #[derive(Debug, Clone)]
    pub struct $name {
      info: Info,
    }

    impl $name {
      pub fn new(info: Info) -> Self {
        Self { info }
      }
    }

    impl Decorator for $name {
      fn decorate(&self) -> String {
        format!(concat!(" ", $greeting, " {}!!"), self.info.text())
      }

      fn name(&self) -> &'static str {
        stringify!($name)
      }
    }
  };
}

greeting_decorator!(HiDecorator, "Hi");
greeting_decorator!(ByeDecorator, "Bye");
greeting_decorator!(NamasteDecorator, "Namaste");

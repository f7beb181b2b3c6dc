//! Terminal coloring
//!
//! Texspan uses the
//! [Colored crate](https://docs.rs/colored/latest/colored/) for terminal coloring.
//! Use of this crate is behind the `color` Cargo feature, which is on by default.
//!
//! The module contains a single trait [`Colorize`].
//! When the Cargo feature is enabled, this trait forwards all method calls to
//!     the Colored crate's `Colorize` trait.
//! When the Cargo feature is disabled, the trait returns the string unchanged.
//! In both cases, downstream code can just call methods on the trait:
//!
//! ```
//! use texspan::color::Colorize;
//! println!["{}", "\\section".bright_blue().bold()];
//! ```

#[cfg(feature = "color")]
pub type ColoredString = colored::ColoredString;

#[cfg(not(feature = "color"))]
pub type ColoredString = String;

macro_rules! colorize_impl {
    ( $( $method_name: ident, )+ ) => {
        /// Trait that provides coloring methods on strings.
        ///
        /// See the module documentation for information.
        pub trait Colorize {
            $(
                fn $method_name(self) -> ColoredString;
            )+
        }
        #[cfg(feature="color")]
        impl Colorize for ColoredString {
            $(
                fn $method_name(self) -> ColoredString {
                    colored::Colorize::$method_name(self)
                }
            )+
        }
        #[cfg(feature="color")]
        impl Colorize for &str {
            $(
                fn $method_name(self) -> ColoredString {
                    colored::Colorize::$method_name(self)
                }
            )+
        }
        #[cfg(not(feature="color"))]
        impl Colorize for ColoredString {
            $(
                fn $method_name(self) -> ColoredString {
                    self
                }
            )+
        }
        #[cfg(not(feature="color"))]
        impl Colorize for &str {
            $(
                fn $method_name(self) -> ColoredString {
                    self.to_string()
                }
            )+
        }
    };
}

colorize_impl!(
    bold,
    italic,
    magenta,
    bright_black,
    bright_blue,
    bright_magenta,
    bright_red,
    bright_yellow,
);

/// Forces coloring on or off, overriding the environment.
///
/// Without the `color` feature output is never colored and this does nothing.
pub fn set_override(enabled: bool) {
    #[cfg(feature = "color")]
    colored::control::set_override(enabled);
    #[cfg(not(feature = "color"))]
    let _ = enabled;
}

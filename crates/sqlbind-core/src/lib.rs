//! # sqlbind-core
//!
//! Tokenizes SQL statements once and renders them any number of times with
//! different bound values.
//!
//! Binding is textual: values are written into the statement as SQL literals
//! rather than handed to the database as typed parameters. A
//! [`ParsedStatement`] keeps the scanned token stream and a store of the
//! current bindings, so rebinding never re-scans the source.
//!
//! ## Placeholders
//!
//! | Syntax    | Key                                              |
//! |-----------|--------------------------------------------------|
//! | `?`       | previous index + 1 (the first `?` is 1)          |
//! | `?N`      | index `N`, which also becomes the previous index |
//! | `:N`      | same as `?N`                                     |
//! | `:word`   | the name `word`                                  |
//! | `:word:`  | the name `word`                                  |
//!
//! ```rust
//! use sqlbind_core::{BindArg, ParsedStatement, bind_args};
//!
//! let mut stmt = ParsedStatement::parse("select * from people where name = :name and age > ?; rest")?;
//! assert_eq!(stmt.sql(), "select * from people where name = :name and age > :1");
//! assert_eq!(stmt.trailing(), " rest");
//!
//! stmt.bind_params(bind_args![30, BindArg::named([("name", "O'Hara")])]);
//! assert_eq!(
//!     stmt.render(),
//!     "select * from people where name = 'O''Hara' and age > 30"
//! );
//! # Ok::<(), sqlbind_core::ScanError>(())
//! ```

pub mod bind;
pub mod error;
pub mod lexer;
pub mod placeholder;
pub mod script;
pub mod statement;
pub mod value;

pub use bind::{BindArg, BindSlot, BindStore};
pub use error::{Result, ScanError};
pub use lexer::{Lexer, Token};
pub use placeholder::Placeholder;
pub use script::Script;
pub use statement::ParsedStatement;
pub use value::{SqlValue, quote};

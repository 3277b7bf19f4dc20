//! Basic usage example for tagcheck

use tagcheck::prelude::*;
use tracing::Level;

#[derive(Record)]
struct Registration {
    #[validate("non-empty:16")]
    pub username: String,
    #[validate("non-empty:64")]
    pub display_name: String,
    #[validate("non-empty:0")]
    pub motto: String,
    pub age: u8,
}

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let ok = Registration {
        username: "ada".into(),
        display_name: "Ada Lovelace".into(),
        motto: String::new(),
        age: 36,
    };

    match ok.validate() {
        Ok(()) => println!("valid"),
        Err(err) => println!("invalid:\n{err}"),
    }

    let bad = Registration {
        username: String::new(),
        display_name: "Ada".into(),
        motto: "poetical science".into(),
        age: 36,
    };

    match validate(&bad) {
        Ok(()) => println!("valid"),
        Err(Error::NotARecord { found }) => println!("not a record: {found}"),
        Err(Error::Invalid(errors)) => {
            for error in &errors {
                println!(
                    "{:<14} {:<22} {error}",
                    error.field().unwrap_or("?"),
                    error.kind().code()
                );
            }
        }
    }

    if let Err(err) = validate("plain text") {
        println!("{err}");
    }
}

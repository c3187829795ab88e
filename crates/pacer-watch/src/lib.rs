#![deny(missing_docs)]
#![doc = "Derived-quantity consistency model for the Pacer watch cards: three watch reducers, the coupled run/form deck, dial tables and activity import."]

pub mod activity;
pub mod body;
pub mod deck;
pub mod dial;
pub mod form;
pub mod run;

pub use activity::ActivityImport;
pub use body::{bmi_from, height_from_bmi, weight_from_bmi, BodyWatch};
pub use deck::{Deck, DeckAction, LockPair};
pub use dial::DialOption;
pub use form::{cadence_from_pace, pace_from_form, stride_from_pace, FormWatch};
pub use run::RunWatch;

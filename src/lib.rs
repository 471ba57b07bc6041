//! Build a frequency-filtered vocabulary from a plain-text corpus.
//!
//! The crate is layered; each layer only calls the ones below it:
//!
//! | Layer | Module        | Role                                      |
//! |-------|---------------|-------------------------------------------|
//! | 1     | `cli`         | argument parsing and printing             |
//! | 2     | `application` | use cases that wire the pipeline together |
//! | 3     | `domain`      | Sentence, Vocabulary, errors, traits      |
//! | 4     | `data`        | tokenizer, loader, counting, builder      |
//! | 5     | `infra`       | vocabulary export and re-import           |

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;

//! # hipe-nel
//!
//! Processing of CoNLL-style NER corpora and entity linking against a Wikidata-derived
//! Elasticsearch index.
//!
//! ## Getting started
//!
//! ```sh
//! USAGE:
//!     hipe-nel [OPTIONS] <SUBCOMMAND>
//!
//! OPTIONS:
//!         --field-size-limit <field-size-limit>    maximum length of a field, in bytes.
//!
//! SUBCOMMANDS:
//!     documents    Split a corpus into documents of fragments and write it back
//!     fragments    Split a corpus into fragments and write it back
//!     link         Output sentences and their entity mentions, linked to Wikidata
//!     mentions     Output sentences and their entity mentions as JSON lines
//!     sentences    Split a corpus into sentences and write it back
//! ```
//!
//! Logging is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).
use std::io::BufWriter;

use hipe_nel::config;
use hipe_nel::error::Error;
use hipe_nel::kb::{ElasticClient, KnowledgeBase};
use hipe_nel::pipeline::Pipeline;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::HipeNel::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Some(limit) = opt.field_size_limit {
        config::set_field_size_limit(limit)?;
    }

    match opt.command {
        cli::Command::Sentences(s) => {
            let p = Pipeline::new(s.src, s.columns.into(), s.segmenter.into());
            p.sentences(&s.dst)?;
        }

        cli::Command::Fragments(f) => {
            let p = Pipeline::new(f.src, Default::default(), Default::default());
            p.fragments(&f.dst, f.min_length)?;
        }

        cli::Command::Documents(d) => {
            let p = Pipeline::new(d.src, Default::default(), Default::default());
            p.documents(&d.dst)?;
        }

        cli::Command::Mentions(m) => {
            let p = Pipeline::new(m.src, m.columns.into(), m.segmenter.into());
            let out = BufWriter::new(std::io::stdout().lock());
            p.annotate::<_, ElasticClient>(out, None)?;
        }

        cli::Command::Link(l) => {
            let client = ElasticClient::new(&l.url)?;
            let kb = KnowledgeBase::with_indices(client, &l.index, &l.descriptions_index)
                .max_candidates(l.max_candidates);
            info!("linking against {} ({})", l.url, l.index);

            let p = Pipeline::new(l.src, l.columns.into(), l.segmenter.into());
            let out = BufWriter::new(std::io::stdout().lock());
            p.annotate(out, Some(&kb))?;
        }
    };
    Ok(())
}

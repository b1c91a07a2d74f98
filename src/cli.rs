//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use hipe_nel::config::{Columns, SegmenterConfig};

#[derive(Debug, StructOpt)]
#[structopt(name = "hipe-nel", about = "CoNLL corpus processing and entity linking.")]
/// Holds every command that is callable by the `hipe-nel` command.
pub struct HipeNel {
    #[structopt(
        long = "field-size-limit",
        help = "maximum length of a field, in bytes. Unbounded by default."
    )]
    pub field_size_limit: Option<usize>,
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(about = "Split a corpus into sentences and write it back")]
    Sentences(Sentences),
    #[structopt(about = "Split a corpus into fragments and write it back")]
    Fragments(Fragments),
    #[structopt(about = "Split a corpus into documents of fragments and write it back")]
    Documents(Documents),
    #[structopt(about = "Output sentences and their entity mentions as JSON lines")]
    Mentions(Mentions),
    #[structopt(about = "Output sentences and their entity mentions, linked to Wikidata")]
    Link(Link),
}

/// Column names.
#[derive(Debug, StructOpt)]
pub struct ColumnArgs {
    #[structopt(long = "token-column", default_value = "TOKEN")]
    pub token: String,
    #[structopt(long = "tag-column", default_value = "NE-COARSE-LIT")]
    pub tag: String,
    #[structopt(long = "misc-column", default_value = "MISC")]
    pub misc: String,
}

impl From<ColumnArgs> for Columns {
    fn from(c: ColumnArgs) -> Self {
        Columns {
            token: c.token,
            tag: c.tag,
            misc: c.misc,
        }
    }
}

/// Sentence boundary heuristic.
#[derive(Debug, StructOpt)]
pub struct SegmenterArgs {
    #[structopt(
        long = "terminators",
        help = "tokens ending a sentence",
        default_value = ".,!,?",
        use_delimiter = true
    )]
    pub terminators: Vec<String>,
    #[structopt(
        long = "abbreviations",
        help = "tokens that prevent a following terminator from ending a sentence",
        default_value = "Mr,Mrs,Dr",
        use_delimiter = true
    )]
    pub abbreviations: Vec<String>,
}

impl From<SegmenterArgs> for SegmenterConfig {
    fn from(s: SegmenterArgs) -> Self {
        SegmenterConfig::new(s.terminators, s.abbreviations)
    }
}

#[derive(Debug, StructOpt)]
pub struct Sentences {
    #[structopt(parse(from_os_str), help = "source corpus file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub columns: ColumnArgs,
    #[structopt(flatten)]
    pub segmenter: SegmenterArgs,
}

#[derive(Debug, StructOpt)]
pub struct Fragments {
    #[structopt(parse(from_os_str), help = "source corpus file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file")]
    pub dst: PathBuf,
    #[structopt(
        short = "l",
        long = "min-length",
        help = "minimum number of rows of a fragment",
        default_value = "10"
    )]
    pub min_length: usize,
}

#[derive(Debug, StructOpt)]
pub struct Documents {
    #[structopt(parse(from_os_str), help = "source corpus file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Mentions {
    #[structopt(parse(from_os_str), help = "source corpus file")]
    pub src: PathBuf,
    #[structopt(flatten)]
    pub columns: ColumnArgs,
    #[structopt(flatten)]
    pub segmenter: SegmenterArgs,
}

#[derive(Debug, StructOpt)]
pub struct Link {
    #[structopt(parse(from_os_str), help = "source corpus file")]
    pub src: PathBuf,
    #[structopt(flatten)]
    pub columns: ColumnArgs,
    #[structopt(flatten)]
    pub segmenter: SegmenterArgs,
    #[structopt(
        long = "url",
        help = "Elasticsearch url",
        default_value = "http://localhost:9200/"
    )]
    pub url: String,
    #[structopt(long = "index", help = "label index", default_value = "wikidata_clef")]
    pub index: String,
    #[structopt(
        long = "descriptions-index",
        help = "description index",
        default_value = "wikidata_descriptions"
    )]
    pub descriptions_index: String,
    #[structopt(
        short = "n",
        long = "candidates",
        help = "number of candidates per mention",
        default_value = "5"
    )]
    pub max_candidates: usize,
}

use std::path::PathBuf;

use hipe_nel::config::{Columns, SegmenterConfig};
use hipe_nel::error::Error;
use hipe_nel::kb::{ElasticClient, Entry, Hit, KnowledgeBase, SearchClient};
use hipe_nel::pipeline::Pipeline;
use serde_json::Value;

const CORPUS: &str = "TOKEN\tNE-COARSE-LIT\tMISC
# document_id = GDL-1900-01-02-a-i0001
# segment_iiif_link = _
La\tO\t_
ville\tO\t_
de\tO\t_
Lau\tI-loc\t_
¬\tI-loc\t_
sanne\tI-loc\tNoSpaceAfter
.\tO\t_
# segment_iiif_link = _
M\tB-pers\tNoSpaceAfter
.\tI-pers\t_
# segment_iiif_link = _
Favre\tI-pers\t_
parle\tO\tNoSpaceAfter
!\tO\t_
";

/// Answers exact queries with a single hit, full-text queries with nothing.
struct ExactOnly;

impl SearchClient for ExactOnly {
    fn search(&self, _index: &str, body: &Value) -> Result<Vec<Hit>, Error> {
        if body.get("sort").is_none() {
            return Ok(vec![]);
        }
        Ok(vec![Hit {
            score: None,
            source: Entry {
                label_exact: "Q807".to_string(),
                count: 10,
                other: Default::default(),
            },
        }])
    }
}

fn pipeline(dir: &tempfile::TempDir) -> Pipeline {
    let src: PathBuf = dir.path().join("corpus.tsv");
    std::fs::write(&src, CORPUS).unwrap();
    Pipeline::new(src, Columns::default(), SegmenterConfig::default())
}

fn lines(out: Vec<u8>) -> Vec<Value> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test_log::test]
fn mentions() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    pipeline(&dir)
        .annotate::<_, ElasticClient>(&mut out, None)
        .unwrap();

    let lines = lines(out);
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0]["sentence"], "La ville de Lausanne.");
    assert_eq!(lines[0]["mentions"][0]["start"], 3);
    assert_eq!(lines[0]["mentions"][0]["text"], "Lau ¬ sanne");
    assert!(lines[0]["mentions"][0].get("candidates").is_none());

    assert_eq!(lines[1]["sentence"], "M. Favre parle!");
    assert_eq!(lines[1]["mentions"][0]["text"], "M");
    // I after B starts a new span
    assert_eq!(lines[1]["mentions"][1]["text"], ". Favre");
}

#[test]
fn linked_mentions() {
    let dir = tempfile::tempdir().unwrap();
    let kb = KnowledgeBase::new(ExactOnly);
    let mut out = Vec::new();
    pipeline(&dir).annotate(&mut out, Some(&kb)).unwrap();

    let lines = lines(out);
    assert_eq!(lines[0]["mentions"][0]["candidates"], "Q807|NIL");
}

#[test]
fn unknown_column() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("corpus.tsv");
    std::fs::write(&src, CORPUS).unwrap();
    let columns = Columns {
        tag: "NE-FINE-LIT".to_string(),
        ..Columns::default()
    };
    let p = Pipeline::new(src, columns, SegmenterConfig::default());
    let res = p.annotate::<_, ElasticClient>(Vec::new(), None);
    assert!(matches!(res, Err(Error::MissingColumn(_))));
}

#[test]
fn sentences_file() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("out.tsv");
    pipeline(&dir).sentences(&dst).unwrap();

    let written = std::fs::read_to_string(&dst).unwrap();
    // the split "M . / Favre" span is merged back: two groups
    assert_eq!(written.lines().filter(|l| *l == "#").count(), 2);
}

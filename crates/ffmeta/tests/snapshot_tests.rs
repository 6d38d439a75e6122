//! Snapshots of written text and of the serialized document shape.

use ffmeta::{Chapter, Document, Stream, parse, stringify};

fn album() -> Document {
    let mut doc = Document::new();
    doc.tags.insert("title", "Example");
    doc.tags.insert("comment", "a=b;c#d");

    let mut stream = Stream::new();
    stream.tags.insert("language", "eng");
    doc.streams.push(stream);

    let mut intro = Chapter::new("0", "90000").with_timebase("1/1000");
    intro.tags.insert("title", "Intro");
    doc.chapters.push(intro);

    let mut outro = Chapter::new("90000", "180000");
    outro.tags.insert("title", "Outro");
    doc.chapters.push(outro);

    doc
}

#[test]
fn snapshot_written_document() {
    let text = stringify(&album()).unwrap();

    insta::assert_snapshot!(text, @r###"
;FFMETADATA1
title=Example
comment=a\=b\;c\#d
[STREAM]
language=eng
[CHAPTER]
TIMEBASE=1/1000
START=0
END=90000
title=Intro
[CHAPTER]
START=90000
END=180000
title=Outro
"###);
}

#[test]
fn snapshot_parsed_document_json() {
    let doc = parse(&stringify(&album()).unwrap()).unwrap();
    let json = serde_json::to_string_pretty(&doc).unwrap();

    insta::assert_snapshot!(json, @r###"
{
  "metadata": {
    "title": "Example",
    "comment": "a=b;c#d"
  },
  "streams": [
    {
      "metadata": {
        "language": "eng"
      }
    }
  ],
  "chapters": [
    {
      "TIMEBASE": "1/1000",
      "START": "0",
      "END": "90000",
      "metadata": {
        "title": "Intro"
      }
    },
    {
      "START": "90000",
      "END": "180000",
      "metadata": {
        "title": "Outro"
      }
    }
  ]
}
"###);
}

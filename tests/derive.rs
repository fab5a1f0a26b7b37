use trackwire::wire::{ByteReader, ByteWriter, Layout, ReadError};

#[derive(Debug, Default, PartialEq, Layout)]
struct Chapter {
    title: String,
    start: u64,
    #[wire(skip)]
    played: bool,
    artwork: Option<String>,
    index: u16,
    offset: i32,
    kind: u8,
}

fn chapter() -> Chapter {
    Chapter {
        title: "Intro".to_string(),
        start: 1 << 40,
        played: false,
        artwork: None,
        index: 3,
        offset: -250,
        kind: 9,
    }
}

#[test]
fn fields_in_declaration_order() {
    let mut w = ByteWriter::new();
    chapter().write_fields(&mut w).unwrap();

    let mut expected = vec![0, 5, b'I', b'n', b't', b'r', b'o'];
    expected.extend([0, 0, 1, 0, 0, 0, 0, 0]);
    expected.push(0);
    expected.extend([0, 3]);
    expected.extend((-250i32).to_be_bytes());
    expected.push(9);

    assert_eq!(w.into_inner(), expected);
}

#[test]
fn skipped_fields_read_as_default() {
    let written = Chapter {
        played: true,
        artwork: Some("cover.jpg".to_string()),
        ..chapter()
    };

    let mut w = ByteWriter::new();
    written.write_fields(&mut w).unwrap();

    let bytes = w.into_inner();
    let mut r = ByteReader::new(&bytes);
    let read = Chapter::read_fields(&mut r).unwrap();

    assert_eq!(r.remaining(), 0);
    assert!(!read.played);
    assert_eq!(read, Chapter { played: false, ..written });
}

#[test]
fn truncated_layout() {
    let mut w = ByteWriter::new();
    chapter().write_fields(&mut w).unwrap();

    let bytes = w.into_inner();
    let mut r = ByteReader::new(&bytes[..bytes.len() - 1]);

    assert!(matches!(
        Chapter::read_fields(&mut r),
        Err(ReadError::BufferOverflow {
            requested: 1,
            remaining: 0
        })
    ));
}

#[derive(Debug, PartialEq, Layout)]
struct Tagged<T> {
    tag: Option<T>,
    #[wire(skip)]
    cache: Vec<u8>,
}

#[test]
fn generic_layout() {
    let mut w = ByteWriter::new();
    Tagged {
        tag: Some(7u16),
        cache: vec![1, 2, 3],
    }
    .write_fields(&mut w)
    .unwrap();

    let bytes = w.into_inner();
    assert_eq!(bytes, [1, 0, 7]);

    let read = Tagged::<u16>::read_fields(&mut ByteReader::new(&bytes)).unwrap();
    assert_eq!(
        read,
        Tagged {
            tag: Some(7),
            cache: Vec::new()
        }
    );
}


#[cfg(test)]
#[test]
fn abracadabra() {
    use crate::{build_huffman_tree, decode, encode, generate_code_table, FrequencyTable};

    let text = b"abracadabra";
    let frequencies = FrequencyTable::from_text(text);
    let counts: alloc::vec::Vec<(u8, usize)> = frequencies.iter().collect();
    assert_eq!(
        counts,
        [(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)]
    );

    let tree = build_huffman_tree(text).unwrap();
    let table = generate_code_table(&tree);
    let len = |symbol: u8| table.get(symbol).unwrap().len();

    // the most frequent symbol has the unique shortest code,
    // the least frequent ones the longest, however ties were broken
    for other in [b'b', b'r', b'c', b'd'] {
        assert!(len(b'a') < len(other));
    }
    for symbol in [b'a', b'b', b'r'] {
        assert!(len(symbol) <= len(b'c'));
        assert!(len(symbol) <= len(b'd'));
    }

    let encoded = encode(text, &table).unwrap();
    assert_eq!(decode(&tree, &encoded).unwrap(), text);
}

#[cfg(test)]
#[test]
fn single_symbol() {
    use crate::{build_huffman_tree, decode, encode, generate_code_table, Node};

    let tree = build_huffman_tree(b"aaaa").unwrap();
    assert_eq!(tree.root(), &Node::leaf(b'a', 4));

    let table = generate_code_table(&tree);
    assert_eq!(table.get(b'a'), Some(""));

    let encoded = encode(b"aaaa", &table).unwrap();
    assert!(encoded.is_empty());
    assert_eq!(decode(&tree, &encoded).unwrap(), b"aaaa");
}

#[cfg(test)]
#[test]
fn empty_input() {
    use crate::huffman::TreeBuildError;

    assert_eq!(
        crate::build_huffman_tree(b""),
        Err(TreeBuildError::EmptyInput)
    );
}

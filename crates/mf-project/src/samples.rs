//! Built-in sample networks.

use crate::schema::NetworkFile;

/// Six-node textbook network, maximum flow 23 from 0 to 5.
pub fn classic() -> NetworkFile {
    NetworkFile::new("classic", 6, 0, 5).with_edges([
        (0, 1, 16),
        (0, 2, 13),
        (1, 2, 10),
        (1, 3, 12),
        (2, 1, 4),
        (2, 4, 14),
        (3, 2, 9),
        (3, 5, 20),
        (4, 3, 7),
        (4, 5, 4),
    ])
}

/// Five-node network with sink 3 inside the graph, maximum flow 15.
pub fn sample() -> NetworkFile {
    NetworkFile::new("sample", 5, 0, 3).with_edges([
        (0, 1, 10),
        (0, 2, 8),
        (1, 2, 2),
        (1, 3, 5),
        (2, 3, 10),
        (2, 4, 5),
        (3, 4, 7),
    ])
}

/// Look up a sample by name.
pub fn by_name(name: &str) -> Option<NetworkFile> {
    match name {
        "classic" => Some(classic()),
        "sample" => Some(sample()),
        _ => None,
    }
}

pub const NAMES: [&str; 2] = ["classic", "sample"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_network;

    #[test]
    fn samples_are_valid() {
        for name in NAMES {
            let file = by_name(name).unwrap();
            assert_eq!(file.name, name);
            validate_network(&file).unwrap();
        }
        assert!(by_name("missing").is_none());
    }
}

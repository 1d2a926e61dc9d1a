//! Assembly of server records and the relationship edges between them.
//!
//! `S0` is the cloud server. Every other server `S{i}` is an edge server
//! linked to the cloud by an `isLowerOf` edge (edge -> cloud) followed by an
//! `isUpperOf` edge (cloud -> edge). There are no edge-to-edge links.

use super::types::{
    DataProperty, Document, ObjectProperty, Relation, ServerRecord, Servers, CLOUD_LABEL,
    SERVER_PROPERTY_LABEL,
};

/// Errors raised while assembling the document
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Expected {expected} IPv6 addresses for {expected} servers, got {actual}")]
    AddressCountMismatch { expected: usize, actual: usize },

    #[error("Too many edge servers: {edge_server_num}")]
    TooManyServers { edge_server_num: usize },
}

/// Label of the server at `index`
pub fn server_label(index: usize) -> String {
    format!("S{}", index)
}

/// Build the record for server `index` using `address` as its IPv6 address
pub fn build_server(index: usize, address: &str) -> ServerRecord {
    let label = server_label(index);

    let mut object_property = Vec::new();
    if index > 0 {
        object_property.push(ObjectProperty::new(&label, CLOUD_LABEL, Relation::IsLowerOf));
        object_property.push(ObjectProperty::new(CLOUD_LABEL, &label, Relation::IsUpperOf));
    }

    ServerRecord {
        property_label: SERVER_PROPERTY_LABEL.to_string(),
        data_property: DataProperty {
            description: format!("Server{}", label),
            label,
            ipv6_address: address.to_string(),
            served_prefix: index.to_string(),
        },
        object_property,
    }
}

/// Build the full document for one cloud server and `edge_server_num` edge servers.
///
/// `addresses[i]` becomes the address of `S{i}`, so exactly
/// `edge_server_num + 1` addresses are required.
pub fn build_document(
    edge_server_num: usize,
    addresses: Vec<String>,
) -> Result<Document, BuildError> {
    let expected = edge_server_num
        .checked_add(1)
        .ok_or(BuildError::TooManyServers { edge_server_num })?;
    if addresses.len() != expected {
        return Err(BuildError::AddressCountMismatch {
            expected,
            actual: addresses.len(),
        });
    }

    let server = addresses
        .iter()
        .enumerate()
        .map(|(i, addr)| {
            let record = build_server(i, addr);
            log::debug!(
                "Built server {} ({}) with {} relationship(s)",
                record.label(),
                addr,
                record.object_property.len()
            );
            record
        })
        .collect();

    Ok(Document {
        servers: Servers {
            ipv6: addresses,
            server,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addresses(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("2001:db8::{:x}", i)).collect()
    }

    #[test]
    fn test_cloud_server_has_no_edges() {
        let cloud = build_server(0, "::1");
        assert!(cloud.is_cloud());
        assert_eq!(cloud.data_property.label, "S0");
        assert_eq!(cloud.data_property.served_prefix, "0");
        assert_eq!(cloud.data_property.description, "ServerS0");
        assert!(cloud.object_property.is_empty());
    }

    #[test]
    fn test_edge_server_links_to_cloud() {
        let edge = build_server(2, "::2");
        assert!(!edge.is_cloud());
        assert_eq!(edge.property_label, "Server");
        assert_eq!(edge.data_property.ipv6_address, "::2");
        assert_eq!(edge.object_property.len(), 2);

        let lower = &edge.object_property[0];
        assert_eq!(lower.relation, Relation::IsLowerOf);
        assert_eq!(lower.from.value, "S2");
        assert_eq!(lower.to.value, "S0");

        let upper = &edge.object_property[1];
        assert_eq!(upper.relation, Relation::IsUpperOf);
        assert_eq!(upper.from.value, "S0");
        assert_eq!(upper.to.value, "S2");
    }

    #[test]
    fn test_build_document_three_edge_servers() {
        let doc = build_document(3, addresses(4)).unwrap();
        assert_eq!(doc.servers.ipv6.len(), 4);
        assert_eq!(doc.servers.server.len(), 4);

        for (i, record) in doc.servers.server.iter().enumerate() {
            assert_eq!(record.label(), format!("S{}", i));
            assert_eq!(record.data_property.ipv6_address, doc.servers.ipv6[i]);
            let expected_edges = if i == 0 { 0 } else { 2 };
            assert_eq!(record.object_property.len(), expected_edges);
        }
    }

    #[test]
    fn test_build_document_cloud_only() {
        let doc = build_document(0, addresses(1)).unwrap();
        assert_eq!(doc.servers.server.len(), 1);
        assert!(doc.servers.server[0].object_property.is_empty());
    }

    #[test]
    fn test_build_document_rejects_wrong_address_count() {
        let err = build_document(3, addresses(2)).unwrap_err();
        match err {
            BuildError::AddressCountMismatch { expected, actual } => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_build_document_rejects_overflowing_count() {
        let err = build_document(usize::MAX, Vec::new()).unwrap_err();
        assert!(matches!(err, BuildError::TooManyServers { edge_server_num: usize::MAX }));
    }
}

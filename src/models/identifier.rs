use crate::errors::S2pError;
use super::record::RecordKey;

pub const IDENTIFIER_DELIMITER: char = '.';

/// Scout2 item paths have the shape
/// `service.category.region.type.container.type.resource[...]`.
pub const MIN_IDENTIFIER_FIELDS: usize = 7;

/// Decode a Scout2 item path into its (region, container id, resource id) key.
///
/// Fields past the seventh are ignored.
pub fn decode_record_key(identifier: &str) -> Result<RecordKey, S2pError> {
    let fields: Vec<&str> = identifier
        .split(IDENTIFIER_DELIMITER)
        .take(MIN_IDENTIFIER_FIELDS)
        .collect();

    if fields.len() < MIN_IDENTIFIER_FIELDS {
        return Err(S2pError::MalformedIdentifier {
            identifier: identifier.to_string(),
            fields: fields.len(),
        });
    }

    Ok(RecordKey::new(fields[2], fields[4], fields[6]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_security_group_path() {
        let key = decode_record_key("ec2.sg.us-east-1.vpc.vpc-111.sg.sg-222").unwrap();
        assert_eq!(key, RecordKey::new("us-east-1", "vpc-111", "sg-222"));
    }

    #[test]
    fn test_trailing_fields_ignored() {
        let key = decode_record_key("ec2.regions.eu-west-1.vpcs.vpc-a.security_groups.sg-b.rules.ingress").unwrap();
        assert_eq!(key.region, "eu-west-1");
        assert_eq!(key.container_id, "vpc-a");
        assert_eq!(key.resource_id, "sg-b");
    }

    #[test]
    fn test_six_fields_is_malformed() {
        let err = decode_record_key("ec2.sg.us-east-1.vpc.vpc-111.sg").unwrap_err();
        match err {
            S2pError::MalformedIdentifier { identifier, fields } => {
                assert_eq!(identifier, "ec2.sg.us-east-1.vpc.vpc-111.sg");
                assert_eq!(fields, 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_string_is_malformed() {
        assert!(matches!(
            decode_record_key(""),
            Err(S2pError::MalformedIdentifier { fields: 1, .. })
        ));
    }

    #[test]
    fn test_empty_fields_are_kept_positionally() {
        let key = decode_record_key("a.b..d..f.").unwrap();
        assert_eq!(key, RecordKey::new("", "", ""));
    }

    #[test]
    fn test_decoding_is_deterministic() {
        let id = "vpc.regions.ap-south-1.vpcs.vpc-9.subnets.subnet-3";
        assert_eq!(decode_record_key(id).unwrap(), decode_record_key(id).unwrap());
    }
}

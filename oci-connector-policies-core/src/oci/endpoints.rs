//! Regional service hostnames.

pub fn identity(region: &str) -> String {
    format!("identity.{region}.oraclecloud.com")
}

pub fn functions(region: &str) -> String {
    format!("functions.{region}.oci.oraclecloud.com")
}

pub fn logging(region: &str) -> String {
    format!("logging.{region}.oci.oraclecloud.com")
}

pub fn notification(region: &str) -> String {
    format!("notification.{region}.oci.oraclecloud.com")
}

pub fn object_storage(region: &str) -> String {
    format!("objectstorage.{region}.oraclecloud.com")
}

pub fn queue(region: &str) -> String {
    format!("messaging.{region}.oci.oraclecloud.com")
}

pub fn streaming(region: &str) -> String {
    format!("streaming.{region}.oci.oraclecloud.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostnames_embed_the_region() {
        assert_eq!(
            identity("us-ashburn-1"),
            "identity.us-ashburn-1.oraclecloud.com"
        );
        assert_eq!(
            object_storage("eu-frankfurt-1"),
            "objectstorage.eu-frankfurt-1.oraclecloud.com"
        );
    }
}

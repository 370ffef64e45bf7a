pub mod users;

pub mod pb {
    tonic::include_proto!("user");
}

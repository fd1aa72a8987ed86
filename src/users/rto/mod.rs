pub mod profile_rto;

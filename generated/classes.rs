#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoStudent {
    #[prost(string, tag = "1")]
    pub student_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub student_name: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoClassState {
    #[prost(uint32, tag = "1")]
    pub capacity: u32,
    #[prost(bool, tag = "2")]
    pub open_enrollments: bool,
    #[prost(message, repeated, tag = "3")]
    pub enrolled: ::prost::alloc::vec::Vec<ProtoStudent>,
    #[prost(message, repeated, tag = "4")]
    pub discarded: ::prost::alloc::vec::Vec<ProtoStudent>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoReplicaClock {
    /// "host:port"
    #[prost(string, tag = "1")]
    pub address: ::prost::alloc::string::String,
    #[prost(uint64, tag = "2")]
    pub value: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoRegisterReq {
    #[prost(string, tag = "1")]
    pub service_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub address: ::prost::alloc::string::String,
    #[prost(enumeration = "ProtoRole", repeated, tag = "3")]
    pub roles: ::prost::alloc::vec::Vec<i32>,
}
/// Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoRegisterResult {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoLookupReq {
    #[prost(string, tag = "1")]
    pub service_name: ::prost::alloc::string::String,
    /// Empty means any role.
    #[prost(enumeration = "ProtoRole", repeated, tag = "2")]
    pub roles: ::prost::alloc::vec::Vec<i32>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoLookupResult {
    #[prost(string, repeated, tag = "1")]
    pub addresses: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDeleteReq {
    #[prost(string, tag = "1")]
    pub service_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub address: ::prost::alloc::string::String,
}
/// Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDeleteResult {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoEnrollReq {
    #[prost(message, optional, tag = "1")]
    pub student: ::core::option::Option<ProtoStudent>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoEnrollResult {
    #[prost(enumeration = "ProtoResponseCode", tag = "1")]
    pub code: i32,
}
/// Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoListClassReq {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoListClassResult {
    #[prost(enumeration = "ProtoResponseCode", tag = "1")]
    pub code: i32,
    #[prost(message, optional, tag = "2")]
    pub class_state: ::core::option::Option<ProtoClassState>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoOpenEnrollmentsReq {
    /// Signed so that negative capacities reach the server and are rejected there.
    #[prost(int32, tag = "1")]
    pub capacity: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoOpenEnrollmentsResult {
    #[prost(enumeration = "ProtoResponseCode", tag = "1")]
    pub code: i32,
}
/// Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoCloseEnrollmentsReq {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoCloseEnrollmentsResult {
    #[prost(enumeration = "ProtoResponseCode", tag = "1")]
    pub code: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoCancelEnrollmentReq {
    #[prost(string, tag = "1")]
    pub student_id: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoCancelEnrollmentResult {
    #[prost(enumeration = "ProtoResponseCode", tag = "1")]
    pub code: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoActivateReq {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoActivateResult {
    #[prost(enumeration = "ProtoResponseCode", tag = "1")]
    pub code: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDeactivateReq {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDeactivateResult {
    #[prost(enumeration = "ProtoResponseCode", tag = "1")]
    pub code: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDumpReq {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDumpResult {
    #[prost(enumeration = "ProtoResponseCode", tag = "1")]
    pub code: i32,
    #[prost(message, optional, tag = "2")]
    pub class_state: ::core::option::Option<ProtoClassState>,
    #[prost(message, repeated, tag = "3")]
    pub clocks: ::prost::alloc::vec::Vec<ProtoReplicaClock>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoActivateGossipReq {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoActivateGossipResult {
    #[prost(enumeration = "ProtoResponseCode", tag = "1")]
    pub code: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDeactivateGossipReq {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoDeactivateGossipResult {
    #[prost(enumeration = "ProtoResponseCode", tag = "1")]
    pub code: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGossipReq {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGossipResult {
    #[prost(enumeration = "ProtoResponseCode", tag = "1")]
    pub code: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoPropagateStateReq {
    #[prost(message, optional, tag = "1")]
    pub class_state: ::core::option::Option<ProtoClassState>,
    #[prost(string, tag = "2")]
    pub sender_address: ::prost::alloc::string::String,
    #[prost(enumeration = "ProtoRole", tag = "3")]
    pub sender_role: i32,
    #[prost(uint64, tag = "4")]
    pub sender_clock: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoPropagateStateResult {
    #[prost(enumeration = "ProtoResponseCode", tag = "1")]
    pub code: i32,
}
// ---- Shared ----

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ProtoResponseCode {
    Ok = 0,
    InactiveServer = 1,
    InvalidArgument = 2,
    EnrollmentsAlreadyOpened = 3,
    EnrollmentsAlreadyClosed = 4,
    FullClass = 5,
    StudentAlreadyEnrolled = 6,
    NonExistingStudent = 7,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ProtoRole {
    RoleUnspecified = 0,
    Primary = 1,
    Secondary = 2,
}
#[doc = r" Generated client implementations."]
pub mod naming_service_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    pub struct NamingServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl NamingServiceClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> NamingServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        pub async fn register(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoRegisterReq>,
        ) -> Result<tonic::Response<super::ProtoRegisterResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/classes.NamingService/Register");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn lookup(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoLookupReq>,
        ) -> Result<tonic::Response<super::ProtoLookupResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/classes.NamingService/Lookup");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn delete(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoDeleteReq>,
        ) -> Result<tonic::Response<super::ProtoDeleteResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/classes.NamingService/Delete");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for NamingServiceClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for NamingServiceClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "NamingServiceClient {{ ... }}")
        }
    }
}
#[doc = r" Generated client implementations."]
pub mod student_service_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    pub struct StudentServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl StudentServiceClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> StudentServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        pub async fn enroll(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoEnrollReq>,
        ) -> Result<tonic::Response<super::ProtoEnrollResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/classes.StudentService/Enroll");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn list_class(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoListClassReq>,
        ) -> Result<tonic::Response<super::ProtoListClassResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/classes.StudentService/ListClass");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for StudentServiceClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for StudentServiceClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StudentServiceClient {{ ... }}")
        }
    }
}
#[doc = r" Generated client implementations."]
pub mod professor_service_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    pub struct ProfessorServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl ProfessorServiceClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> ProfessorServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        pub async fn open_enrollments(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoOpenEnrollmentsReq>,
        ) -> Result<tonic::Response<super::ProtoOpenEnrollmentsResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/classes.ProfessorService/OpenEnrollments");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn close_enrollments(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoCloseEnrollmentsReq>,
        ) -> Result<tonic::Response<super::ProtoCloseEnrollmentsResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/classes.ProfessorService/CloseEnrollments");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn list_class(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoListClassReq>,
        ) -> Result<tonic::Response<super::ProtoListClassResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/classes.ProfessorService/ListClass");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn cancel_enrollment(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoCancelEnrollmentReq>,
        ) -> Result<tonic::Response<super::ProtoCancelEnrollmentResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/classes.ProfessorService/CancelEnrollment");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for ProfessorServiceClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for ProfessorServiceClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "ProfessorServiceClient {{ ... }}")
        }
    }
}
#[doc = r" Generated client implementations."]
pub mod admin_service_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    pub struct AdminServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl AdminServiceClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> AdminServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        pub async fn activate(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoActivateReq>,
        ) -> Result<tonic::Response<super::ProtoActivateResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/classes.AdminService/Activate");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn deactivate(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoDeactivateReq>,
        ) -> Result<tonic::Response<super::ProtoDeactivateResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/classes.AdminService/Deactivate");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn dump(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoDumpReq>,
        ) -> Result<tonic::Response<super::ProtoDumpResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/classes.AdminService/Dump");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn activate_gossip(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoActivateGossipReq>,
        ) -> Result<tonic::Response<super::ProtoActivateGossipResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/classes.AdminService/ActivateGossip");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn deactivate_gossip(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoDeactivateGossipReq>,
        ) -> Result<tonic::Response<super::ProtoDeactivateGossipResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/classes.AdminService/DeactivateGossip");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn gossip(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoGossipReq>,
        ) -> Result<tonic::Response<super::ProtoGossipResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/classes.AdminService/Gossip");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for AdminServiceClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for AdminServiceClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "AdminServiceClient {{ ... }}")
        }
    }
}
#[doc = r" Generated client implementations."]
pub mod replica_service_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    pub struct ReplicaServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl ReplicaServiceClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> ReplicaServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        pub async fn propagate_state(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoPropagateStateReq>,
        ) -> Result<tonic::Response<super::ProtoPropagateStateResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/classes.ReplicaService/PropagateState");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for ReplicaServiceClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for ReplicaServiceClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "ReplicaServiceClient {{ ... }}")
        }
    }
}
#[doc = r" Generated server implementations."]
pub mod naming_service_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with NamingServiceServer."]
    #[async_trait]
    pub trait NamingService: Send + Sync + 'static {
        async fn register(
            &self,
            request: tonic::Request<super::ProtoRegisterReq>,
        ) -> Result<tonic::Response<super::ProtoRegisterResult>, tonic::Status>;
        async fn lookup(
            &self,
            request: tonic::Request<super::ProtoLookupReq>,
        ) -> Result<tonic::Response<super::ProtoLookupResult>, tonic::Status>;
        async fn delete(
            &self,
            request: tonic::Request<super::ProtoDeleteReq>,
        ) -> Result<tonic::Response<super::ProtoDeleteResult>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct NamingServiceServer<T: NamingService> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: NamingService> NamingServiceServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for NamingServiceServer<T>
    where
        T: NamingService,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/classes.NamingService/Register" => {
                    #[allow(non_camel_case_types)]
                    struct RegisterSvc<T: NamingService>(pub Arc<T>);
                    impl<T: NamingService> tonic::server::UnaryService<super::ProtoRegisterReq> for RegisterSvc<T> {
                        type Response = super::ProtoRegisterResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoRegisterReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).register(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = RegisterSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/classes.NamingService/Lookup" => {
                    #[allow(non_camel_case_types)]
                    struct LookupSvc<T: NamingService>(pub Arc<T>);
                    impl<T: NamingService> tonic::server::UnaryService<super::ProtoLookupReq> for LookupSvc<T> {
                        type Response = super::ProtoLookupResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoLookupReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).lookup(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = LookupSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/classes.NamingService/Delete" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteSvc<T: NamingService>(pub Arc<T>);
                    impl<T: NamingService> tonic::server::UnaryService<super::ProtoDeleteReq> for DeleteSvc<T> {
                        type Response = super::ProtoDeleteResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoDeleteReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).delete(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = DeleteSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: NamingService> Clone for NamingServiceServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: NamingService> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: NamingService> tonic::transport::NamedService for NamingServiceServer<T> {
        const NAME: &'static str = "classes.NamingService";
    }
}
#[doc = r" Generated server implementations."]
pub mod student_service_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with StudentServiceServer."]
    #[async_trait]
    pub trait StudentService: Send + Sync + 'static {
        async fn enroll(
            &self,
            request: tonic::Request<super::ProtoEnrollReq>,
        ) -> Result<tonic::Response<super::ProtoEnrollResult>, tonic::Status>;
        async fn list_class(
            &self,
            request: tonic::Request<super::ProtoListClassReq>,
        ) -> Result<tonic::Response<super::ProtoListClassResult>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct StudentServiceServer<T: StudentService> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: StudentService> StudentServiceServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for StudentServiceServer<T>
    where
        T: StudentService,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/classes.StudentService/Enroll" => {
                    #[allow(non_camel_case_types)]
                    struct EnrollSvc<T: StudentService>(pub Arc<T>);
                    impl<T: StudentService> tonic::server::UnaryService<super::ProtoEnrollReq> for EnrollSvc<T> {
                        type Response = super::ProtoEnrollResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoEnrollReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).enroll(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = EnrollSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/classes.StudentService/ListClass" => {
                    #[allow(non_camel_case_types)]
                    struct ListClassSvc<T: StudentService>(pub Arc<T>);
                    impl<T: StudentService> tonic::server::UnaryService<super::ProtoListClassReq> for ListClassSvc<T> {
                        type Response = super::ProtoListClassResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoListClassReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).list_class(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = ListClassSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: StudentService> Clone for StudentServiceServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: StudentService> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: StudentService> tonic::transport::NamedService for StudentServiceServer<T> {
        const NAME: &'static str = "classes.StudentService";
    }
}
#[doc = r" Generated server implementations."]
pub mod professor_service_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with ProfessorServiceServer."]
    #[async_trait]
    pub trait ProfessorService: Send + Sync + 'static {
        async fn open_enrollments(
            &self,
            request: tonic::Request<super::ProtoOpenEnrollmentsReq>,
        ) -> Result<tonic::Response<super::ProtoOpenEnrollmentsResult>, tonic::Status>;
        async fn close_enrollments(
            &self,
            request: tonic::Request<super::ProtoCloseEnrollmentsReq>,
        ) -> Result<tonic::Response<super::ProtoCloseEnrollmentsResult>, tonic::Status>;
        async fn list_class(
            &self,
            request: tonic::Request<super::ProtoListClassReq>,
        ) -> Result<tonic::Response<super::ProtoListClassResult>, tonic::Status>;
        async fn cancel_enrollment(
            &self,
            request: tonic::Request<super::ProtoCancelEnrollmentReq>,
        ) -> Result<tonic::Response<super::ProtoCancelEnrollmentResult>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct ProfessorServiceServer<T: ProfessorService> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: ProfessorService> ProfessorServiceServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for ProfessorServiceServer<T>
    where
        T: ProfessorService,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/classes.ProfessorService/OpenEnrollments" => {
                    #[allow(non_camel_case_types)]
                    struct OpenEnrollmentsSvc<T: ProfessorService>(pub Arc<T>);
                    impl<T: ProfessorService>
                        tonic::server::UnaryService<super::ProtoOpenEnrollmentsReq>
                        for OpenEnrollmentsSvc<T>
                    {
                        type Response = super::ProtoOpenEnrollmentsResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoOpenEnrollmentsReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).open_enrollments(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = OpenEnrollmentsSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/classes.ProfessorService/CloseEnrollments" => {
                    #[allow(non_camel_case_types)]
                    struct CloseEnrollmentsSvc<T: ProfessorService>(pub Arc<T>);
                    impl<T: ProfessorService>
                        tonic::server::UnaryService<super::ProtoCloseEnrollmentsReq>
                        for CloseEnrollmentsSvc<T>
                    {
                        type Response = super::ProtoCloseEnrollmentsResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoCloseEnrollmentsReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).close_enrollments(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = CloseEnrollmentsSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/classes.ProfessorService/ListClass" => {
                    #[allow(non_camel_case_types)]
                    struct ListClassSvc<T: ProfessorService>(pub Arc<T>);
                    impl<T: ProfessorService> tonic::server::UnaryService<super::ProtoListClassReq>
                        for ListClassSvc<T>
                    {
                        type Response = super::ProtoListClassResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoListClassReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).list_class(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = ListClassSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/classes.ProfessorService/CancelEnrollment" => {
                    #[allow(non_camel_case_types)]
                    struct CancelEnrollmentSvc<T: ProfessorService>(pub Arc<T>);
                    impl<T: ProfessorService>
                        tonic::server::UnaryService<super::ProtoCancelEnrollmentReq>
                        for CancelEnrollmentSvc<T>
                    {
                        type Response = super::ProtoCancelEnrollmentResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoCancelEnrollmentReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).cancel_enrollment(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = CancelEnrollmentSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: ProfessorService> Clone for ProfessorServiceServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: ProfessorService> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: ProfessorService> tonic::transport::NamedService for ProfessorServiceServer<T> {
        const NAME: &'static str = "classes.ProfessorService";
    }
}
#[doc = r" Generated server implementations."]
pub mod admin_service_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with AdminServiceServer."]
    #[async_trait]
    pub trait AdminService: Send + Sync + 'static {
        async fn activate(
            &self,
            request: tonic::Request<super::ProtoActivateReq>,
        ) -> Result<tonic::Response<super::ProtoActivateResult>, tonic::Status>;
        async fn deactivate(
            &self,
            request: tonic::Request<super::ProtoDeactivateReq>,
        ) -> Result<tonic::Response<super::ProtoDeactivateResult>, tonic::Status>;
        async fn dump(
            &self,
            request: tonic::Request<super::ProtoDumpReq>,
        ) -> Result<tonic::Response<super::ProtoDumpResult>, tonic::Status>;
        async fn activate_gossip(
            &self,
            request: tonic::Request<super::ProtoActivateGossipReq>,
        ) -> Result<tonic::Response<super::ProtoActivateGossipResult>, tonic::Status>;
        async fn deactivate_gossip(
            &self,
            request: tonic::Request<super::ProtoDeactivateGossipReq>,
        ) -> Result<tonic::Response<super::ProtoDeactivateGossipResult>, tonic::Status>;
        async fn gossip(
            &self,
            request: tonic::Request<super::ProtoGossipReq>,
        ) -> Result<tonic::Response<super::ProtoGossipResult>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct AdminServiceServer<T: AdminService> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: AdminService> AdminServiceServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for AdminServiceServer<T>
    where
        T: AdminService,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/classes.AdminService/Activate" => {
                    #[allow(non_camel_case_types)]
                    struct ActivateSvc<T: AdminService>(pub Arc<T>);
                    impl<T: AdminService> tonic::server::UnaryService<super::ProtoActivateReq> for ActivateSvc<T> {
                        type Response = super::ProtoActivateResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoActivateReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).activate(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = ActivateSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/classes.AdminService/Deactivate" => {
                    #[allow(non_camel_case_types)]
                    struct DeactivateSvc<T: AdminService>(pub Arc<T>);
                    impl<T: AdminService> tonic::server::UnaryService<super::ProtoDeactivateReq> for DeactivateSvc<T> {
                        type Response = super::ProtoDeactivateResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoDeactivateReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).deactivate(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = DeactivateSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/classes.AdminService/Dump" => {
                    #[allow(non_camel_case_types)]
                    struct DumpSvc<T: AdminService>(pub Arc<T>);
                    impl<T: AdminService> tonic::server::UnaryService<super::ProtoDumpReq> for DumpSvc<T> {
                        type Response = super::ProtoDumpResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoDumpReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).dump(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = DumpSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/classes.AdminService/ActivateGossip" => {
                    #[allow(non_camel_case_types)]
                    struct ActivateGossipSvc<T: AdminService>(pub Arc<T>);
                    impl<T: AdminService> tonic::server::UnaryService<super::ProtoActivateGossipReq>
                        for ActivateGossipSvc<T>
                    {
                        type Response = super::ProtoActivateGossipResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoActivateGossipReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).activate_gossip(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = ActivateGossipSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/classes.AdminService/DeactivateGossip" => {
                    #[allow(non_camel_case_types)]
                    struct DeactivateGossipSvc<T: AdminService>(pub Arc<T>);
                    impl<T: AdminService>
                        tonic::server::UnaryService<super::ProtoDeactivateGossipReq>
                        for DeactivateGossipSvc<T>
                    {
                        type Response = super::ProtoDeactivateGossipResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoDeactivateGossipReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).deactivate_gossip(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = DeactivateGossipSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/classes.AdminService/Gossip" => {
                    #[allow(non_camel_case_types)]
                    struct GossipSvc<T: AdminService>(pub Arc<T>);
                    impl<T: AdminService> tonic::server::UnaryService<super::ProtoGossipReq> for GossipSvc<T> {
                        type Response = super::ProtoGossipResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoGossipReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).gossip(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = GossipSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: AdminService> Clone for AdminServiceServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: AdminService> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: AdminService> tonic::transport::NamedService for AdminServiceServer<T> {
        const NAME: &'static str = "classes.AdminService";
    }
}
#[doc = r" Generated server implementations."]
pub mod replica_service_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with ReplicaServiceServer."]
    #[async_trait]
    pub trait ReplicaService: Send + Sync + 'static {
        async fn propagate_state(
            &self,
            request: tonic::Request<super::ProtoPropagateStateReq>,
        ) -> Result<tonic::Response<super::ProtoPropagateStateResult>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct ReplicaServiceServer<T: ReplicaService> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: ReplicaService> ReplicaServiceServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for ReplicaServiceServer<T>
    where
        T: ReplicaService,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/classes.ReplicaService/PropagateState" => {
                    #[allow(non_camel_case_types)]
                    struct PropagateStateSvc<T: ReplicaService>(pub Arc<T>);
                    impl<T: ReplicaService>
                        tonic::server::UnaryService<super::ProtoPropagateStateReq>
                        for PropagateStateSvc<T>
                    {
                        type Response = super::ProtoPropagateStateResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoPropagateStateReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).propagate_state(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = PropagateStateSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: ReplicaService> Clone for ReplicaServiceServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: ReplicaService> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: ReplicaService> tonic::transport::NamedService for ReplicaServiceServer<T> {
        const NAME: &'static str = "classes.ReplicaService";
    }
}

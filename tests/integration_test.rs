use classes::{
    AdminFrontend, ClassServerConfig, ClassServerCreationError, ClassServerHandle, ClassServerOptions, FrontendConfig,
    FrontendError, FrontendOptions, NamingClient, NamingServerConfig, NamingServerCreationError, NamingServerHandle,
    ProfessorFrontend, ReplicaAddress, ResponseCode, Role, StudentFrontend,
};
use std::error::Error;
use tokio::time::Duration;

const HOST: &str = "127.0.0.1";

#[tokio::test]
async fn registry_follows_server_lifecycle() -> Result<(), Box<dyn Error>> {
    let naming_address = address(5101);
    let naming_server = start_naming_server(&naming_address).await?;
    let primary = start_class_server(&naming_address, 8101, Role::Primary).await?;
    let secondary = start_class_server(&naming_address, 8102, Role::Secondary).await?;

    // No sleep: each start returns with its listener bound, so both registrations went through.

    let naming = NamingClient::new(logger("naming-client"), naming_address.clone(), Duration::from_secs(2));

    assert_eq!(
        naming.lookup(classes::CLASS_SERVICE_NAME, &[Role::Primary]).await?,
        vec![address(8101)]
    );
    assert_eq!(
        naming.lookup(classes::CLASS_SERVICE_NAME, &[Role::Secondary]).await?,
        vec![address(8102)]
    );
    assert_eq!(naming.lookup(classes::CLASS_SERVICE_NAME, &[]).await?.len(), 2);
    assert!(naming.lookup("Unknown", &[]).await?.is_empty());

    // A server leaving removes its own entry.
    secondary.shutdown().await;
    assert_eq!(naming.lookup(classes::CLASS_SERVICE_NAME, &[]).await?, vec![address(8101)]);

    primary.shutdown().await;
    naming_server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn gossip_converges_replicas() -> Result<(), Box<dyn Error>> {
    // -- setup --
    let naming_address = address(5201);
    let naming_server = start_naming_server(&naming_address).await?;
    let primary = start_class_server(&naming_address, 8201, Role::Primary).await?;
    let secondary = start_class_server(&naming_address, 8202, Role::Secondary).await?;
    sleep(Duration::from_millis(300)).await;

    let mut professor = ProfessorFrontend::new(frontend_config(&naming_address))?;
    let mut student = StudentFrontend::new(frontend_config(&naming_address))?;
    let admin = AdminFrontend::new(frontend_config(&naming_address))?;

    // -- execute & verify --

    // 1. Opening goes to the Primary. The Secondary learns about it through gossip.
    professor.open_enrollments(5).await?;
    assert!(!admin.dump(secondary.address()).await?.class_state.open_enrollments);
    admin.gossip(primary.address()).await?;
    assert!(admin.dump(secondary.address()).await?.class_state.open_enrollments);

    // 2. The student lands on either replica. A few rounds in both directions spread it.
    student.enroll("aluno0001", "Ana Silva").await?;
    admin.gossip(primary.address()).await?;
    admin.gossip(secondary.address()).await?;
    admin.gossip(primary.address()).await?;

    for server in [&primary, &secondary].iter() {
        let dump = admin.dump(server.address()).await?;
        assert!(dump.class_state.is_enrolled("aluno0001"), "{} is missing the student", server.address());
        assert_eq!(dump.class_state.capacity, 5);
        assert!(dump.clocks.iter().any(|(address, _)| address == primary.address()));
        assert!(dump.clocks.iter().any(|(address, _)| address == secondary.address()));
    }

    // 3. Re-enrolling is rejected wherever the student lands.
    assert_eq!(
        student.enroll("aluno0001", "Ana Silva").await.unwrap_err(),
        FrontendError::Rejected(ResponseCode::StudentAlreadyEnrolled)
    );

    primary.shutdown().await;
    secondary.shutdown().await;
    naming_server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn clients_fail_over_from_inactive_primary() -> Result<(), Box<dyn Error>> {
    // -- setup --
    let naming_address = address(5301);
    let naming_server = start_naming_server(&naming_address).await?;
    let primary = start_class_server(&naming_address, 8301, Role::Primary).await?;
    let secondary = start_class_server(&naming_address, 8302, Role::Secondary).await?;
    sleep(Duration::from_millis(300)).await;

    let mut professor = ProfessorFrontend::new(frontend_config(&naming_address))?;
    let mut student = StudentFrontend::new(frontend_config(&naming_address))?;
    let admin = AdminFrontend::new(frontend_config(&naming_address))?;

    professor.open_enrollments(3).await?;
    admin.gossip(primary.address()).await?;

    // -- execute & verify --
    admin.deactivate(primary.address()).await?;

    // Either-replica operations move over to the Secondary.
    for _ in 0..5 {
        let class_state = student.list_class().await?;
        assert!(class_state.open_enrollments);
    }
    student.enroll("aluno0002", "Rui Costa").await?;
    assert!(admin.dump(secondary.address()).await?.class_state.is_enrolled("aluno0002"));

    // Primary-only operations report the inactive Primary.
    assert_eq!(
        professor.close_enrollments().await.unwrap_err(),
        FrontendError::Rejected(ResponseCode::InactiveServer)
    );

    // Invalid arguments are reported as such, never retried into something else.
    assert_eq!(
        professor.open_enrollments(-1).await.unwrap_err(),
        FrontendError::Rejected(ResponseCode::InvalidArgument)
    );
    assert_eq!(
        student.enroll("student", "Rui Costa").await.unwrap_err(),
        FrontendError::Rejected(ResponseCode::InvalidArgument)
    );

    // Both inactive.
    admin.deactivate(secondary.address()).await?;
    assert_eq!(
        student.list_class().await.unwrap_err(),
        FrontendError::Rejected(ResponseCode::InactiveServer)
    );

    // Dump still works on inactive replicas.
    assert!(admin.dump(primary.address()).await?.class_state.open_enrollments);

    admin.activate(primary.address()).await?;
    professor.close_enrollments().await?;

    primary.shutdown().await;
    secondary.shutdown().await;
    naming_server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn gossip_fan_out_reports_every_replica() -> Result<(), Box<dyn Error>> {
    let naming_address = address(5401);
    let naming_server = start_naming_server(&naming_address).await?;
    let primary = start_class_server(&naming_address, 8401, Role::Primary).await?;
    let secondary = start_class_server(&naming_address, 8402, Role::Secondary).await?;
    sleep(Duration::from_millis(300)).await;

    let admin = AdminFrontend::new(frontend_config(&naming_address))?;

    let results = admin.activate_gossip_all().await?;
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|(_, result)| result.is_ok()));

    // A replica that left without deregistering shows up as unreachable, the rest still succeed.
    let naming = NamingClient::new(logger("naming-client"), naming_address.clone(), Duration::from_secs(2));
    naming
        .register(classes::CLASS_SERVICE_NAME, &address(8403), &[Role::Secondary])
        .await?;

    let results = admin.deactivate_gossip_all().await?;
    assert_eq!(results.len(), 3);
    for (replica, result) in results {
        if replica == address(8403) {
            assert_eq!(result.unwrap_err(), FrontendError::ServerUnreachable);
        } else {
            assert!(result.is_ok());
        }
    }

    primary.shutdown().await;
    secondary.shutdown().await;
    naming_server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn no_replicas_means_unreachable() -> Result<(), Box<dyn Error>> {
    // Naming server up, nobody registered.
    let naming_address = address(5501);
    let naming_server = start_naming_server(&naming_address).await?;
    sleep(Duration::from_millis(200)).await;

    let mut student = StudentFrontend::new(frontend_config(&naming_address))?;
    assert_eq!(
        student.enroll("aluno0001", "Ana Silva").await.unwrap_err(),
        FrontendError::ServerUnreachable
    );

    let mut professor = ProfessorFrontend::new(frontend_config(&naming_address))?;
    assert_eq!(
        professor.open_enrollments(3).await.unwrap_err(),
        FrontendError::ServerUnreachable
    );

    // No naming server at all.
    let mut student = StudentFrontend::new(frontend_config(&address(5599)))?;
    assert_eq!(student.list_class().await.unwrap_err(), FrontendError::ServerUnreachable);

    naming_server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn server_started_before_naming_server_registers_on_next_gossip() -> Result<(), Box<dyn Error>> {
    // -- setup --
    let naming_address = address(5601);
    let primary = start_class_server(&naming_address, 8601, Role::Primary).await?;
    let naming_server = start_naming_server(&naming_address).await?;

    let naming = NamingClient::new(logger("naming-client"), naming_address.clone(), Duration::from_secs(2));
    let admin = AdminFrontend::new(frontend_config(&naming_address))?;

    // -- execute & verify --

    // 1. The registration at startup had nobody to talk to.
    assert!(naming.lookup(classes::CLASS_SERVICE_NAME, &[]).await?.is_empty());

    // 2. A gossip round registers it.
    admin.gossip(primary.address()).await?;
    assert_eq!(
        naming.lookup(classes::CLASS_SERVICE_NAME, &[Role::Primary]).await?,
        vec![address(8601)]
    );

    // 3. Now clients find it.
    let mut professor = ProfessorFrontend::new(frontend_config(&naming_address))?;
    professor.open_enrollments(2).await?;

    primary.shutdown().await;
    assert!(naming.lookup(classes::CLASS_SERVICE_NAME, &[]).await?.is_empty());
    naming_server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn occupied_port_fails_creation() -> Result<(), Box<dyn Error>> {
    let naming_address = address(5701);
    let naming_server = start_naming_server(&naming_address).await?;

    let result = classes::try_create_naming_server(NamingServerConfig {
        address: naming_address.clone(),
        info_logger: logger("naming"),
    })
    .await;
    assert!(matches!(result, Err(NamingServerCreationError::BindFailure(_, _))));

    let result = classes::try_create_class_server(ClassServerConfig {
        address: naming_address.clone(),
        role: Role::Primary,
        naming_address: naming_address.clone(),
        service_name: classes::CLASS_SERVICE_NAME.to_string(),
        info_logger: logger("class-5701"),
        options: ClassServerOptions::default(),
    })
    .await;
    assert!(matches!(result, Err(ClassServerCreationError::BindFailure(_, _))));

    naming_server.shutdown().await;
    Ok(())
}

fn address(port: u16) -> ReplicaAddress {
    ReplicaAddress::new(HOST, port)
}

async fn start_naming_server(naming_address: &ReplicaAddress) -> Result<NamingServerHandle, Box<dyn Error>> {
    let config = NamingServerConfig {
        address: naming_address.clone(),
        info_logger: logger("naming"),
    };

    Ok(classes::try_create_naming_server(config).await?)
}

async fn start_class_server(
    naming_address: &ReplicaAddress,
    port: u16,
    role: Role,
) -> Result<ClassServerHandle, Box<dyn Error>> {
    let config = ClassServerConfig {
        address: address(port),
        role,
        naming_address: naming_address.clone(),
        service_name: classes::CLASS_SERVICE_NAME.to_string(),
        info_logger: logger(&format!("class-{}", port)),
        options: ClassServerOptions {
            rpc_timeout: Some(Duration::from_secs(2)),
            ..ClassServerOptions::default()
        },
    };

    Ok(classes::try_create_class_server(config).await?)
}

fn frontend_config(naming_address: &ReplicaAddress) -> FrontendConfig {
    FrontendConfig {
        naming_address: naming_address.clone(),
        service_name: classes::CLASS_SERVICE_NAME.to_string(),
        info_logger: logger("frontend"),
        options: FrontendOptions {
            rpc_timeout: Some(Duration::from_secs(2)),
            ..FrontendOptions::default()
        },
    }
}

fn logger(component: &str) -> slog::Logger {
    classes::create_root_logger_for_stdout(component.to_string(), false)
}

async fn sleep(duration: Duration) {
    println!("Sleep {}ms", duration.as_millis());
    tokio::time::sleep(duration).await;
    println!("Awake!");
}

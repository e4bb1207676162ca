use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use car_dealership::config::{DatabaseConfig, EnvironmentConfig, StorageBackend};
use car_dealership::create_app;
use car_dealership::database::DatabaseConnection;
use car_dealership::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Car Dealership API");
    info!("================================================");

    let app_state = match config.storage {
        StorageBackend::Memory => {
            info!("🧠 Usando almacenamiento en memoria");
            AppState::in_memory(config.clone())
        }
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let db_connection = match DatabaseConnection::connect(&db_config).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(anyhow::anyhow!("Error de base de datos: {}", e));
                }
            };
            db_connection.run_migrations().await?;
            info!("🐘 Usando PostgreSQL");
            AppState::postgres(config.clone(), db_connection.pool().clone())
        }
    };

    let app = create_app(app_state);
    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Vehicles:");
    info!("   POST   /vehicles - Registrar vehículo");
    info!("   GET    /vehicles - Listar vehículos");
    info!("   GET    /vehicles/available - Listar vehículos disponibles");
    info!("   GET    /vehicles/:id - Obtener vehículo");
    info!("   PUT    /vehicles/:id - Actualizar vehículo");
    info!("   DELETE /vehicles/:id - Eliminar vehículo");
    info!("👤 Clients:");
    info!("   POST /clients - Registrar cliente");
    info!("   GET  /clients/:id - Obtener cliente");
    info!("   GET  /clients/cpf/:cpf - Buscar cliente por CPF");
    info!("💰 Sales:");
    info!("   POST /sales - Realizar venta");
    info!("   GET  /sales - Listar ventas");
    info!("   GET  /sales/vehicle/:vehicle_id - Venta de un vehículo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}

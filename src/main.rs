use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fleet_assignment::config::environment::EnvironmentConfig;
use fleet_assignment::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚚 Fleet Assignment - Conductores y Rutas");
    info!("=========================================");

    let config = EnvironmentConfig::from_env();
    info!("⚙️ Entorno: {}", config.environment);
    if config.cors_origins.is_empty() {
        if config.is_production() {
            warn!("⚠️ CORS_ORIGINS vacío en producción: se acepta cualquier origen");
        } else if config.is_development() {
            info!("🔓 CORS permisivo (desarrollo)");
        }
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::from_config(config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check + consistencia");
    info!("   GET  /stats - Conteos de la flota");
    info!("   GET  /locations - Ciudades disponibles");
    info!("👤 Conductores:");
    info!("   POST /drivers - Crear conductor");
    info!("   GET  /drivers?search=&availability= - Listar/filtrar conductores");
    info!("   GET  /drivers/available - Conductores asignables");
    info!("   GET  /drivers/:id - Obtener conductor");
    info!("🛣️ Rutas:");
    info!("   POST /routes - Crear ruta");
    info!("   GET  /routes?search=&status= - Listar/filtrar rutas");
    info!("   GET  /routes/presets - Rutas predefinidas");
    info!("   GET  /routes/:id - Obtener ruta con su conductor");
    info!("   POST /routes/:id/assign - Asignar conductor");
    info!("   POST /routes/:id/unassign - Liberar ruta");
    info!("   POST /routes/:id/reassign - Reasignar conductor");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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

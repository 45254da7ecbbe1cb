//! Búsqueda de módulos por id, inyectada en las reglas que necesitan nombres
//! legibles para sus mensajes.

use async_trait::async_trait;

use crate::models::Module;

/// Consulta de solo lectura, potencialmente asíncrona (p. ej. una base de datos
/// en la aplicación que envuelve el motor).
#[async_trait]
pub trait ModuleResolver: Send + Sync {
    async fn resolve(&self, module_id: &str) -> Option<Module>;
}

/// Adaptador para usar un closure como resolver (útil en tests para mockear
/// sin depender de un catálogo real).
pub struct ResolverFn<F>(pub F);

#[async_trait]
impl<F> ModuleResolver for ResolverFn<F>
where
    F: Fn(&str) -> Option<Module> + Send + Sync,
{
    async fn resolve(&self, module_id: &str) -> Option<Module> {
        (self.0)(module_id)
    }
}

/// Resolver que no conoce ningún módulo: los mensajes caen al id.
pub struct NoopResolver;

#[async_trait]
impl ModuleResolver for NoopResolver {
    async fn resolve(&self, _module_id: &str) -> Option<Module> {
        None
    }
}
